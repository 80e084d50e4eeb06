//! Journal lifecycle integration tests.
//!
//! Exercise the public service surface end to end:
//! - File-backed persistence across reopen
//! - Role and ownership checks across users
//! - Cascading deletes
//! - Lexicon scoring through the service

use happy_core::enums::{EntryType, Gitmoji, Mood, Role};
use happy_core::identity::AuthIdentity;
use happy_db::service::JournalService;
use happy_db::updates::entry::{EntryUpdateBuilder, NewEntry};
use happy_enrich::Enricher;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

async fn memory_service() -> JournalService {
    JournalService::new_local(":memory:", Enricher::keyword())
        .await
        .unwrap()
}

async fn register(svc: &JournalService, username: &str, role: Role) -> AuthIdentity {
    let user = svc.create_user(username, "password123", role).await.unwrap();
    AuthIdentity {
        user_id: user.id,
        username: user.username,
        role: user.role,
    }
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn entries_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.db");
    let path = path.to_str().unwrap();

    let (identity, entry_id) = {
        let svc = JournalService::new_local(path, Enricher::keyword())
            .await
            .unwrap();
        let alice = register(&svc, "alice", Role::Writer).await;
        let entry = svc
            .create_entry(
                &alice,
                NewEntry::new("Learned a new trick with async traits", EntryType::Insight)
                    .with_mood(Mood::Excited),
            )
            .await
            .unwrap();
        (alice, entry.id)
    };

    let svc = JournalService::new_local(path, Enricher::keyword())
        .await
        .unwrap();
    let entry = svc.get_entry(&identity, &entry_id).await.unwrap();
    assert_eq!(entry.mood, Some(Mood::Excited));
    assert!(entry.is_enriched());
    assert!(
        svc.authenticate("alice", "password123")
            .await
            .unwrap()
            .is_some()
    );
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn visitor_can_read_nothing_and_write_nothing() {
    let svc = memory_service().await;
    let alice = register(&svc, "alice", Role::Writer).await;
    let guest = register(&svc, "guest", Role::Visitor).await;
    let entry = svc
        .create_entry(&alice, NewEntry::new("mine", EntryType::Highlight))
        .await
        .unwrap();

    assert!(svc.list_entries(&guest, 0, 10).await.unwrap().is_empty());
    assert!(svc.get_entry(&guest, &entry.id).await.unwrap_err().is_forbidden());
    assert!(
        svc.create_entry(&guest, NewEntry::new("hi", EntryType::Question))
            .await
            .unwrap_err()
            .is_forbidden()
    );
    assert!(svc.create_tag(&guest, "x").await.unwrap_err().is_forbidden());
}

#[tokio::test]
async fn admin_can_edit_any_entry() {
    let svc = memory_service().await;
    let alice = register(&svc, "alice", Role::Writer).await;
    let admin = register(&svc, "root", Role::Admin).await;
    let entry = svc
        .create_entry(&alice, NewEntry::new("typo in here", EntryType::Reflection))
        .await
        .unwrap();

    let updated = svc
        .update_entry(
            &admin,
            &entry.id,
            EntryUpdateBuilder::new().content("no typo here").build(),
        )
        .await
        .unwrap();
    assert_eq!(updated.user_id, alice.user_id);
    assert_eq!(updated.content, "no typo here");
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleting_a_user_removes_their_journal() {
    let svc = memory_service().await;
    let admin = register(&svc, "root", Role::Admin).await;
    let alice = register(&svc, "alice", Role::Writer).await;
    let tag = svc.create_tag(&alice, "work").await.unwrap();
    svc.create_entry(
        &alice,
        NewEntry::new("sprint review", EntryType::Progress).with_tags(vec![tag.id]),
    )
    .await
    .unwrap();

    svc.delete_user(&admin, &alice.user_id).await.unwrap();

    let stats = svc.stats(&admin).await.unwrap();
    assert_eq!(stats.users, 1);
    assert_eq!(stats.entries, 0);
    assert_eq!(stats.tags, 0);
    assert!(stats.entry_types.is_empty());
}

// ---------------------------------------------------------------------------
// Enrichment strategies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lexicon_strategy_scores_through_service() {
    let svc = JournalService::new_local(":memory:", Enricher::lexicon(None).unwrap())
        .await
        .unwrap();
    let alice = register(&svc, "alice", Role::Writer).await;
    let entry = svc
        .create_entry(&alice, NewEntry::new("a wonderful day", EntryType::Highlight))
        .await
        .unwrap();
    let score = entry.sentiment_score.unwrap();
    assert!(score > 0.0 && score < 1.0, "{score}");
    assert_eq!(svc.enricher().scorer().name(), "lexicon");
}

#[tokio::test]
async fn empty_bug_entry_gets_defaults_when_stored() {
    let svc = memory_service().await;
    let alice = register(&svc, "alice", Role::Writer).await;
    let entry = svc
        .create_entry(&alice, NewEntry::new("", EntryType::Bug))
        .await
        .unwrap();
    let stored = svc.get_entry(&alice, &entry.id).await.unwrap();
    assert_eq!(stored.gitmojis, vec![Gitmoji::Bug]);
    assert_eq!(stored.sentiment_score, Some(0.0));
}
