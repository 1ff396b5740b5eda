use warden_auth::{PasswordResetForm, can_reset_password};
use warden_core::responses::{AccessCheckResponse, ResetReceipt};

use crate::cli::{GlobalFlags, PasswordCommands};
use crate::context::AppContext;
use crate::output::output;

/// Handle `warden password`.
///
/// Ids that do not resolve to a user are treated as absent, which the reset
/// rule always denies.
pub fn handle(
    action: &PasswordCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PasswordCommands::Check { actor, target } => {
            output(&check(ctx, actor, target), flags.format)
        }
        PasswordCommands::Reset {
            actor,
            target,
            new_password,
            confirm_password,
        } => {
            let mut form = PasswordResetForm::new(new_password.as_str(), confirm_password.as_str());
            let receipt = reset(ctx, actor, target, &mut form)?;
            if !flags.quiet {
                eprintln!("{}", receipt.message);
            }
            output(&receipt, flags.format)
        }
    }
}

fn check(ctx: &AppContext, actor: &str, target: &str) -> AccessCheckResponse {
    AccessCheckResponse {
        actor_id: actor.to_string(),
        target_id: target.to_string(),
        allowed: can_reset_password(ctx.store.user(actor), ctx.store.user(target)),
    }
}

fn reset(
    ctx: &mut AppContext,
    actor: &str,
    target: &str,
    form: &mut PasswordResetForm,
) -> anyhow::Result<ResetReceipt> {
    let actor = ctx.store.user(actor).cloned();
    let target = ctx.store.user(target).cloned();
    let receipt = form.submit(&mut ctx.store, actor.as_ref(), target.as_ref())?;
    Ok(receipt)
}
