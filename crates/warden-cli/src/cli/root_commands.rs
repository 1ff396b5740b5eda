use clap::{Args, Subcommand};
use warden_compliance::GuardSelection;
use warden_core::enums::ReportingPeriod;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// User directory.
    Users {
        #[command(subcommand)]
        action: UsersCommands,
    },
    /// Password administration.
    Password {
        #[command(subcommand)]
        action: PasswordCommands,
    },
    /// Compliance dashboard as seen by a user.
    Dashboard(DashboardArgs),
}

#[derive(Clone, Debug, Subcommand)]
pub enum UsersCommands {
    /// List users.
    List {
        /// Only users whose password this user id may reset.
        #[arg(long)]
        resettable_by: Option<String>,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum PasswordCommands {
    /// Check whether one user may reset another's password.
    Check {
        #[arg(long)]
        actor: String,
        #[arg(long)]
        target: String,
    },
    /// Reset a user's password.
    Reset {
        #[arg(long)]
        actor: String,
        #[arg(long)]
        target: String,
        #[arg(long = "new")]
        new_password: String,
        #[arg(long = "confirm")]
        confirm_password: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// User id the dashboard is rendered for.
    #[arg(long)]
    pub viewer: String,

    /// Reporting period (defaults to `general.default_period`).
    #[arg(long)]
    pub period: Option<ReportingPeriod>,

    /// `all`/`todos` or a guard id (defaults to `general.default_guard`).
    #[arg(long)]
    pub guard: Option<GuardSelection>,
}
