use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Users { action } => commands::users::handle(action, ctx, flags),
        Commands::Password { action } => commands::password::handle(action, ctx, flags),
        Commands::Dashboard(args) => commands::dashboard::handle(args, ctx, flags),
    }
}
