use happy_core::ids::PREFIX_USER;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::commands::DeletedResponse;
use crate::commands::shared::parse::require_id;
use crate::commands::shared::session::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `happy admin <subcommand>`.
pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = require_identity(ctx).await?;
    match action {
        AdminCommands::Users => {
            let users = ctx.service.list_users(&caller).await?;
            tracing::info!(admin = %caller.username, count = users.len(), "listed users");
            output(&users, flags.format)
        }
        AdminCommands::Stats => {
            let stats = ctx.service.stats(&caller).await?;
            output(&stats, flags.format)
        }
        AdminCommands::DeleteUser { id } => {
            require_id(id, PREFIX_USER, "user")?;
            ctx.service.delete_user(&caller, id).await?;
            tracing::info!(admin = %caller.username, user_id = %id, "deleted user");
            output(&DeletedResponse::new(id), flags.format)
        }
    }
}
