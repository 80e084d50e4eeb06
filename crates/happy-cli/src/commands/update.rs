use happy_core::entities::Entry;
use happy_core::enums::{EntryType, Mood};
use happy_core::identity::AuthIdentity;
use happy_core::ids::{PREFIX_ENTRY, PREFIX_TAG};
use happy_db::updates::entry::{EntryUpdate, EntryUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::parse::{parse_enum, require_id};
use crate::commands::shared::session::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `happy update`.
pub async fn handle(args: &UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(args)?;
    let caller = require_identity(ctx).await?;
    let entry = run(&args.id, update, ctx, &caller).await?;
    output(&entry, flags.format)
}

pub(crate) async fn run(
    id: &str,
    update: EntryUpdate,
    ctx: &AppContext,
    caller: &AuthIdentity,
) -> anyhow::Result<Entry> {
    Ok(ctx.service.update_entry(caller, id, update).await?)
}

fn build_update(args: &UpdateArgs) -> anyhow::Result<EntryUpdate> {
    require_id(&args.id, PREFIX_ENTRY, "entry")?;

    let mut builder = EntryUpdateBuilder::new();
    if let Some(content) = &args.content {
        builder = builder.content(content.clone());
    }
    if let Some(raw) = &args.entry_type {
        builder = builder.entry_type(parse_enum::<EntryType>(raw, "type")?);
    }
    if args.clear_mood {
        builder = builder.mood(None);
    } else if let Some(raw) = &args.mood {
        builder = builder.mood(Some(parse_enum::<Mood>(raw, "mood")?));
    }
    if args.clear_tags {
        builder = builder.tags(Vec::new());
    } else if !args.tags.is_empty() {
        for tag in &args.tags {
            require_id(tag, PREFIX_TAG, "tag")?;
        }
        builder = builder.tags(args.tags.clone());
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!(
            "nothing to update: pass --content, --type, --mood, --clear-mood, --tag, or --clear-tags"
        );
    }
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::shared::testing::{identity, test_context};
    use happy_core::enums::Role;
    use happy_db::updates::entry::NewEntry;

    fn args(id: &str) -> UpdateArgs {
        UpdateArgs {
            id: id.into(),
            content: None,
            entry_type: None,
            mood: None,
            clear_mood: false,
            tags: Vec::new(),
            clear_tags: false,
        }
    }

    #[test]
    fn empty_update_is_rejected() {
        let err = build_update(&args("ent-a3f8b2c1")).unwrap_err();
        assert!(err.to_string().starts_with("nothing to update"));
    }

    #[test]
    fn clear_flags_map_to_explicit_empties() {
        let update = build_update(&UpdateArgs {
            clear_mood: true,
            clear_tags: true,
            ..args("ent-a3f8b2c1")
        })
        .unwrap();
        assert_eq!(update.mood, Some(None));
        assert_eq!(update.tags, Some(Vec::new()));
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(build_update(&args("42")).is_err());
        let bad_tag = UpdateArgs {
            tags: vec!["work".into()],
            ..args("ent-a3f8b2c1")
        };
        assert!(build_update(&bad_tag).is_err());
    }

    #[tokio::test]
    async fn update_changes_type_and_mood() {
        let ctx = test_context().await;
        let alice = identity(&ctx, "alice", Role::Writer).await;
        let entry = ctx
            .service
            .create_entry(&alice, NewEntry::new("hmm", EntryType::Question))
            .await
            .unwrap();

        let update = build_update(&UpdateArgs {
            entry_type: Some("insight".into()),
            mood: Some("tired".into()),
            ..args(&entry.id)
        })
        .unwrap();
        let updated = run(&entry.id, update, &ctx, &alice).await.unwrap();
        assert_eq!(updated.entry_type, EntryType::Insight);
        assert_eq!(updated.mood, Some(Mood::Tired));
    }
}
