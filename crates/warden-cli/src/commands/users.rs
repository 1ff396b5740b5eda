use warden_auth::resettable_targets;
use warden_core::entities::User;
use warden_core::responses::UserListResponse;

use crate::cli::{GlobalFlags, UsersCommands};
use crate::context::AppContext;
use crate::output::output;

/// Handle `warden users`.
pub fn handle(action: &UsersCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UsersCommands::List { resettable_by } => {
            let response = list_users(ctx, resettable_by.as_deref())?;
            output(&response, flags.format)
        }
    }
}

fn list_users(ctx: &AppContext, resettable_by: Option<&str>) -> anyhow::Result<UserListResponse> {
    let users: Vec<User> = match resettable_by {
        Some(actor_id) => {
            let actor = ctx.require_user(actor_id)?;
            resettable_targets(actor, ctx.store.users())
                .into_iter()
                .cloned()
                .collect()
        }
        None => ctx.store.users().to_vec(),
    };

    Ok(UserListResponse {
        total: u32::try_from(users.len())?,
        users,
    })
}
