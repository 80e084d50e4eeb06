use happy_core::entities::Entry;
use happy_core::enums::{EntryType, Mood};
use happy_core::identity::AuthIdentity;
use happy_core::ids::PREFIX_TAG;
use happy_db::updates::entry::NewEntry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WriteArgs;
use crate::commands::shared::parse::{parse_enum, require_id};
use crate::commands::shared::session::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `happy write`.
pub async fn handle(args: &WriteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let caller = require_identity(ctx).await?;
    let entry = run(args, ctx, &caller).await?;
    output(&entry, flags.format)
}

pub(crate) async fn run(
    args: &WriteArgs,
    ctx: &AppContext,
    caller: &AuthIdentity,
) -> anyhow::Result<Entry> {
    let entry_type: EntryType = parse_enum(&args.entry_type, "type")?;
    for tag in &args.tags {
        require_id(tag, PREFIX_TAG, "tag")?;
    }

    let mut new = NewEntry::new(args.content.clone(), entry_type).with_tags(args.tags.clone());
    if let Some(raw) = &args.mood {
        new = new.with_mood(parse_enum::<Mood>(raw, "mood")?);
    }
    Ok(ctx.service.create_entry(caller, new).await?)
}
