use happy_core::ids::PREFIX_ENTRY;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::commands::DeletedResponse;
use crate::commands::shared::parse::require_id;
use crate::commands::shared::session::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `happy delete`.
pub async fn handle(args: &DeleteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_id(&args.id, PREFIX_ENTRY, "entry")?;
    let caller = require_identity(ctx).await?;
    ctx.service.delete_entry(&caller, &args.id).await?;
    output(&DeletedResponse::new(&args.id), flags.format)
}
