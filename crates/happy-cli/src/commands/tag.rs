use happy_core::ids::PREFIX_TAG;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TagCommands;
use crate::commands::DeletedResponse;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::require_id;
use crate::commands::shared::session::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `happy tag <subcommand>`.
pub async fn handle(
    action: &TagCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let caller = require_identity(ctx).await?;
    match action {
        TagCommands::Create { name } => {
            let tag = ctx.service.create_tag(&caller, name).await?;
            output(&tag, flags.format)
        }
        TagCommands::List { skip } => {
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            let tags = ctx.service.list_tags(&caller, *skip, limit).await?;
            output(&tags, flags.format)
        }
        TagCommands::Delete { id } => {
            require_id(id, PREFIX_TAG, "tag")?;
            ctx.service.delete_tag(&caller, id).await?;
            output(&DeletedResponse::new(id), flags.format)
        }
    }
}
