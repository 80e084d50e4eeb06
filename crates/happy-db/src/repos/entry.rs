//! Entry repository: create, read, edit, delete, and weekly views.

use chrono::{Datelike, SubsecRound, Utc};

use happy_core::entities::Entry;
use happy_core::enums::Mood;
use happy_core::identity::AuthIdentity;
use happy_core::ids::PREFIX_ENTRY;
use happy_core::responses::FormattedEntry;

use crate::error::DatabaseError;
use crate::helpers::{
    format_datetime, get_opt_string, gitmojis_to_json, parse_datetime, parse_enum,
    parse_gitmojis, parse_optional_datetime,
};
use crate::service::JournalService;
use crate::updates::entry::{EntryUpdate, NewEntry};

const ENTRY_COLUMNS: &str = "id, user_id, content, entry_type, mood, week_number, gitmojis, \
                             sentiment_score, created_at, updated_at";

fn row_to_entry(row: &libsql::Row) -> Result<Entry, DatabaseError> {
    let week = row.get::<i64>(5)?;
    Ok(Entry {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        content: row.get::<String>(2)?,
        entry_type: parse_enum(&row.get::<String>(3)?)?,
        mood: get_opt_string(row, 4)?
            .map(|m| parse_enum::<Mood>(&m))
            .transpose()?,
        week_number: u32::try_from(week)
            .map_err(|_| DatabaseError::InvalidState(format!("bad week number: {week}")))?,
        gitmojis: parse_gitmojis(&row.get::<String>(6)?)?,
        sentiment_score: row.get::<Option<f64>>(7)?,
        tags: Vec::new(),
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_optional_datetime(get_opt_string(row, 9)?.as_deref())?,
    })
}

impl JournalService {
    /// Record an entry for the caller, enriching it before it is stored.
    ///
    /// # Errors
    ///
    /// - `Forbidden` for visitors, or for a tag owned by someone else.
    /// - `NotFound` for an unknown tag ID.
    pub async fn create_entry(
        &self,
        caller: &AuthIdentity,
        new: NewEntry,
    ) -> Result<Entry, DatabaseError> {
        Self::require_writer(caller, "create entries")?;
        let tags = dedup_tags(new.tags);
        self.check_tags(caller, &tags).await?;

        let mut entry = Entry::new(caller.user_id.as_str(), new.content, new.entry_type);
        entry.created_at = entry.created_at.trunc_subsecs(6);
        entry.id = self.db().generate_id(PREFIX_ENTRY).await?;
        entry.mood = new.mood;
        entry.tags = tags;
        let entry = self.enricher().enrich(entry);

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            &format!(
                "INSERT INTO entries ({ENTRY_COLUMNS}, iso_year)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, NULL, ?10)"
            ),
            libsql::params![
                entry.id.as_str(),
                entry.user_id.as_str(),
                entry.content.as_str(),
                entry.entry_type.as_str(),
                entry.mood.map(Mood::as_str),
                i64::from(entry.week_number),
                gitmojis_to_json(&entry.gitmojis)?,
                entry.sentiment_score,
                format_datetime(&entry.created_at),
                i64::from(entry.iso_year())
            ],
        )
        .await?;
        for tag_id in &entry.tags {
            tx.execute(
                "INSERT INTO entry_tags (entry_id, tag_id) VALUES (?1, ?2)",
                libsql::params![entry.id.as_str(), tag_id.as_str()],
            )
            .await?;
        }
        tx.commit().await?;

        tracing::debug!(
            entry_id = %entry.id,
            user_id = %entry.user_id,
            entry_type = %entry.entry_type,
            gitmojis = entry.gitmojis.len(),
            "created entry"
        );
        Ok(entry)
    }

    pub async fn get_entry(&self, caller: &AuthIdentity, id: &str) -> Result<Entry, DatabaseError> {
        let entry = self.load_entry(id).await?;
        Self::require_owner(caller, &entry.user_id, "access this entry")?;
        Ok(entry)
    }

    /// Apply the provided fields. New content is re-scored and re-marked.
    pub async fn update_entry(
        &self,
        caller: &AuthIdentity,
        id: &str,
        update: EntryUpdate,
    ) -> Result<Entry, DatabaseError> {
        let existing = self.load_entry(id).await?;
        Self::require_owner(caller, &existing.user_id, "update this entry")?;
        Self::require_writer(caller, "update entries")?;

        if update.is_empty() {
            return Ok(existing);
        }

        let tags = update.tags.map(dedup_tags);
        if let Some(ref tags) = tags {
            self.check_tags(caller, tags).await?;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref entry_type) = update.entry_type {
            sets.push(format!("entry_type = ?{idx}"));
            params.push(entry_type.as_str().into());
            idx += 1;
        }
        if let Some(ref mood) = update.mood {
            sets.push(format!("mood = ?{idx}"));
            params.push(mood.map(Mood::as_str).into());
            idx += 1;
        }
        if let Some(content) = update.content.filter(|c| *c != existing.content) {
            let mut rescored = existing.clone();
            rescored.content = content;
            rescored.entry_type = update.entry_type.unwrap_or(existing.entry_type);
            rescored.sentiment_score = None;
            rescored.gitmojis.clear();
            let rescored = self.enricher().enrich(rescored);

            sets.push(format!("content = ?{idx}"));
            params.push(rescored.content.into());
            idx += 1;
            sets.push(format!("gitmojis = ?{idx}"));
            params.push(gitmojis_to_json(&rescored.gitmojis)?.into());
            idx += 1;
            sets.push(format!("sentiment_score = ?{idx}"));
            params.push(rescored.sentiment_score.into());
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(format_datetime(&Utc::now()).into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE entries SET {} WHERE id = ?{idx}", sets.join(", "));

        let tx = self.db().conn().transaction().await?;
        tx.execute(&sql, libsql::params_from_iter(params)).await?;
        if let Some(ref tags) = tags {
            tx.execute("DELETE FROM entry_tags WHERE entry_id = ?1", [id])
                .await?;
            for tag_id in tags {
                tx.execute(
                    "INSERT INTO entry_tags (entry_id, tag_id) VALUES (?1, ?2)",
                    libsql::params![id, tag_id.as_str()],
                )
                .await?;
            }
        }
        tx.commit().await?;

        tracing::debug!(entry_id = id, user_id = %caller.user_id, "updated entry");
        self.load_entry(id).await
    }

    pub async fn delete_entry(&self, caller: &AuthIdentity, id: &str) -> Result<(), DatabaseError> {
        let entry = self.load_entry(id).await?;
        Self::require_owner(caller, &entry.user_id, "delete this entry")?;
        Self::require_writer(caller, "delete entries")?;

        self.db()
            .conn()
            .execute("DELETE FROM entries WHERE id = ?1", [id])
            .await?;
        tracing::debug!(entry_id = id, user_id = %caller.user_id, "deleted entry");
        Ok(())
    }

    /// The caller's entries, newest first.
    pub async fn list_entries(
        &self,
        caller: &AuthIdentity,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Entry>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM entries WHERE user_id = ?1
                     ORDER BY created_at DESC, rowid DESC LIMIT ?2 OFFSET ?3"
                ),
                libsql::params![caller.user_id.as_str(), i64::from(limit), i64::from(skip)],
            )
            .await?;
        self.collect_entries(rows).await
    }

    /// The caller's entries from ISO week `week` of `year`, newest first.
    ///
    /// `year` defaults to the current ISO year.
    ///
    /// # Errors
    ///
    /// Returns `Core(Validation)` when `week` is outside `1..=53`.
    pub async fn entries_for_week(
        &self,
        caller: &AuthIdentity,
        week: u32,
        year: Option<i32>,
    ) -> Result<Vec<Entry>, DatabaseError> {
        if !(1..=53).contains(&week) {
            return Err(DatabaseError::validation(format!(
                "week must be between 1 and 53, got {week}"
            )));
        }
        let year = year.unwrap_or_else(|| Utc::now().iso_week().year());
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM entries
                     WHERE user_id = ?1 AND week_number = ?2 AND iso_year = ?3
                     ORDER BY created_at DESC, rowid DESC"
                ),
                libsql::params![caller.user_id.as_str(), i64::from(week), i64::from(year)],
            )
            .await?;
        self.collect_entries(rows).await
    }

    pub async fn formatted_entry(
        &self,
        caller: &AuthIdentity,
        id: &str,
    ) -> Result<FormattedEntry, DatabaseError> {
        let entry = self.get_entry(caller, id).await?;
        Ok(FormattedEntry::from(&entry))
    }

    /// Fetch with tags attached, without a permission check.
    async fn load_entry(&self, id: &str) -> Result<Entry, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Entry", id))?;
        let mut entry = row_to_entry(&row)?;
        entry.tags = self.entry_tag_ids(&entry.id).await?;
        Ok(entry)
    }

    async fn collect_entries(&self, mut rows: libsql::Rows) -> Result<Vec<Entry>, DatabaseError> {
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        for entry in &mut entries {
            entry.tags = self.entry_tag_ids(&entry.id).await?;
        }
        Ok(entries)
    }

    async fn entry_tag_ids(&self, entry_id: &str) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT tag_id FROM entry_tags WHERE entry_id = ?1 ORDER BY rowid",
                [entry_id],
            )
            .await?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<String>(0)?);
        }
        Ok(ids)
    }

    /// Every tag must exist and belong to the caller (or the caller is an admin).
    async fn check_tags(&self, caller: &AuthIdentity, tags: &[String]) -> Result<(), DatabaseError> {
        for tag_id in tags {
            let tag = self.load_tag(tag_id).await?;
            Self::require_owner(caller, &tag.user_id, "use this tag")?;
        }
        Ok(())
    }
}

fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_identity, test_service};
    use crate::updates::entry::EntryUpdateBuilder;
    use happy_core::enums::{EntryType, Gitmoji, Role};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_entry_enriches_and_persists() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;

        let entry = svc
            .create_entry(
                &alice,
                NewEntry::new(
                    "Fixed a nasty bug in the login flow, feeling great about it",
                    EntryType::Bug,
                )
                .with_mood(Mood::Happy),
            )
            .await
            .unwrap();

        assert!(entry.id.starts_with("ent-"));
        assert!(entry.gitmojis.contains(&Gitmoji::Bug));
        assert!(entry.sentiment_score.unwrap() > 0.0);
        assert_eq!(entry.week_number, Utc::now().iso_week().week());

        let stored = svc.get_entry(&alice, &entry.id).await.unwrap();
        assert_eq!(stored, entry);
    }

    #[tokio::test]
    async fn visitors_cannot_write() {
        let svc = test_service().await;
        let guest = seed_identity(&svc, "guest", Role::Visitor).await;
        let err = svc
            .create_entry(&guest, NewEntry::new("hello", EntryType::Highlight))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "You don't have permission to create entries");
    }

    #[tokio::test]
    async fn foreign_entries_are_forbidden() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let bob = seed_identity(&svc, "bob", Role::Writer).await;
        let admin = seed_identity(&svc, "root", Role::Admin).await;
        let entry = svc
            .create_entry(&alice, NewEntry::new("private", EntryType::Reflection))
            .await
            .unwrap();

        let err = svc.get_entry(&bob, &entry.id).await.unwrap_err();
        assert_eq!(err.to_string(), "You don't have permission to access this entry");
        assert!(svc.delete_entry(&bob, &entry.id).await.unwrap_err().is_forbidden());
        assert!(
            svc.update_entry(&bob, &entry.id, EntryUpdateBuilder::new().content("x").build())
                .await
                .unwrap_err()
                .is_forbidden()
        );

        assert_eq!(svc.get_entry(&admin, &entry.id).await.unwrap().id, entry.id);
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let err = svc.get_entry(&alice, "ent-00000000").await.unwrap_err();
        assert_eq!(err.to_string(), "Entry not found: ent-00000000");
    }

    #[tokio::test]
    async fn tags_are_validated_and_attached() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let bob = seed_identity(&svc, "bob", Role::Writer).await;
        let work = svc.create_tag(&alice, "work").await.unwrap();
        let travel = svc.create_tag(&bob, "travel").await.unwrap();

        let entry = svc
            .create_entry(
                &alice,
                NewEntry::new("standup went well", EntryType::Progress)
                    .with_tags(vec![work.id.clone(), work.id.clone()]),
            )
            .await
            .unwrap();
        assert_eq!(entry.tags, vec![work.id.clone()]);

        let err = svc
            .create_entry(
                &alice,
                NewEntry::new("trip", EntryType::Highlight).with_tags(vec![travel.id.clone()]),
            )
            .await
            .unwrap_err();
        assert!(err.is_forbidden());

        let err = svc
            .create_entry(
                &alice,
                NewEntry::new("ghost", EntryType::Highlight)
                    .with_tags(vec!["tag-00000000".into()]),
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        svc.delete_tag(&alice, &work.id).await.unwrap();
        let detached = svc.get_entry(&alice, &entry.id).await.unwrap();
        assert!(detached.tags.is_empty());
    }

    #[tokio::test]
    async fn content_change_rescores_entry() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let entry = svc
            .create_entry(&alice, NewEntry::new("great happy day", EntryType::Reflection))
            .await
            .unwrap();
        assert!(entry.sentiment_score.unwrap() > 0.0);

        let updated = svc
            .update_entry(
                &alice,
                &entry.id,
                EntryUpdateBuilder::new()
                    .content("terrible awful day, fixed a bug")
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.content, "terrible awful day, fixed a bug");
        assert!(updated.sentiment_score.unwrap() < 0.0);
        assert!(updated.gitmojis.contains(&Gitmoji::Bug));
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.created_at, entry.created_at);
    }

    #[tokio::test]
    async fn metadata_update_keeps_enrichment() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let entry = svc
            .create_entry(
                &alice,
                NewEntry::new("shipped it", EntryType::Progress).with_mood(Mood::Excited),
            )
            .await
            .unwrap();

        let updated = svc
            .update_entry(
                &alice,
                &entry.id,
                EntryUpdateBuilder::new()
                    .entry_type(EntryType::Highlight)
                    .mood(None)
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.entry_type, EntryType::Highlight);
        assert_eq!(updated.mood, None);
        assert_eq!(updated.gitmojis, entry.gitmojis);
        assert_eq!(updated.sentiment_score, entry.sentiment_score);
    }

    #[tokio::test]
    async fn empty_update_is_a_no_op() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let entry = svc
            .create_entry(&alice, NewEntry::new("same", EntryType::Insight))
            .await
            .unwrap();
        let unchanged = svc
            .update_entry(&alice, &entry.id, EntryUpdate::default())
            .await
            .unwrap();
        assert_eq!(unchanged, entry);
    }

    #[tokio::test]
    async fn list_is_newest_first_and_scoped() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let bob = seed_identity(&svc, "bob", Role::Writer).await;
        for content in ["first", "second", "third"] {
            svc.create_entry(&alice, NewEntry::new(content, EntryType::Progress))
                .await
                .unwrap();
        }
        svc.create_entry(&bob, NewEntry::new("bob's", EntryType::Progress))
            .await
            .unwrap();

        let contents: Vec<String> = svc
            .list_entries(&alice, 0, 10)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.content)
            .collect();
        assert_eq!(contents, vec!["third", "second", "first"]);

        let page = svc.list_entries(&alice, 1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].content, "second");
    }

    #[tokio::test]
    async fn week_view_matches_week_and_year() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let entry = svc
            .create_entry(&alice, NewEntry::new("this week", EntryType::Highlight))
            .await
            .unwrap();
        let iso = entry.created_at.iso_week();

        let this_week = svc
            .entries_for_week(&alice, iso.week(), None)
            .await
            .unwrap();
        assert_eq!(this_week.len(), 1);

        let last_year = svc
            .entries_for_week(&alice, iso.week(), Some(iso.year() - 1))
            .await
            .unwrap();
        assert!(last_year.is_empty());
    }

    #[rstest::rstest]
    #[case(0)]
    #[case(54)]
    #[case(99)]
    #[tokio::test]
    async fn week_outside_iso_range_is_rejected(#[case] week: u32) {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let err = svc.entries_for_week(&alice, week, None).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Core(happy_core::errors::CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn formatted_entry_prefixes_glyphs() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let entry = svc
            .create_entry(&alice, NewEntry::new("", EntryType::Bug))
            .await
            .unwrap();
        let formatted = svc.formatted_entry(&alice, &entry.id).await.unwrap();
        assert_eq!(formatted.gitmojis, vec!["🐛".to_string()]);
        assert_eq!(formatted.formatted_content, "🐛 ");
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let entry = svc
            .create_entry(&alice, NewEntry::new("oops", EntryType::Bug))
            .await
            .unwrap();
        svc.delete_entry(&alice, &entry.id).await.unwrap();
        assert!(svc.get_entry(&alice, &entry.id).await.unwrap_err().is_not_found());
    }
}
