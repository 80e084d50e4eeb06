use happy_core::ids::PREFIX_ENTRY;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::shared::parse::require_id;
use crate::commands::shared::session::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `happy show`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_id(&args.id, PREFIX_ENTRY, "entry")?;
    let caller = require_identity(ctx).await?;

    if args.formatted {
        let formatted = ctx.service.formatted_entry(&caller, &args.id).await?;
        output(&formatted, flags.format)
    } else {
        let entry = ctx.service.get_entry(&caller, &args.id).await?;
        output(&entry, flags.format)
    }
}
