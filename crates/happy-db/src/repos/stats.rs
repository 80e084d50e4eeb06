//! System-wide counters for administrators.

use happy_core::enums::EntryType;
use happy_core::identity::AuthIdentity;
use happy_core::responses::SystemStats;

use crate::error::DatabaseError;
use crate::helpers::{get_count, parse_enum};
use crate::service::JournalService;

impl JournalService {
    pub async fn stats(&self, caller: &AuthIdentity) -> Result<SystemStats, DatabaseError> {
        Self::require_admin(caller, "view system statistics")?;

        let mut stats = SystemStats {
            users: self.count("users").await?,
            entries: self.count("entries").await?,
            tags: self.count("tags").await?,
            ..SystemStats::default()
        };

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT entry_type, COUNT(*) FROM entries GROUP BY entry_type",
                (),
            )
            .await?;
        while let Some(row) = rows.next().await? {
            let entry_type: EntryType = parse_enum(&row.get::<String>(0)?)?;
            stats.entry_types.insert(entry_type, get_count(&row, 1)?);
        }
        Ok(stats)
    }

    async fn count(&self, table: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_count(&row, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_identity, test_service};
    use crate::updates::entry::NewEntry;
    use happy_core::enums::Role;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn stats_count_everything() {
        let svc = test_service().await;
        let admin = seed_identity(&svc, "root", Role::Admin).await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        svc.create_tag(&alice, "work").await.unwrap();
        for entry_type in [EntryType::Bug, EntryType::Bug, EntryType::Insight] {
            svc.create_entry(&alice, NewEntry::new("note", entry_type))
                .await
                .unwrap();
        }

        let stats = svc.stats(&admin).await.unwrap();
        assert_eq!(stats.users, 2);
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.tags, 1);
        assert_eq!(stats.entry_types.get(&EntryType::Bug), Some(&2));
        assert_eq!(stats.entry_types.get(&EntryType::Insight), Some(&1));
        assert_eq!(stats.entry_types.get(&EntryType::Highlight), None);
    }

    #[tokio::test]
    async fn stats_are_admin_only() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let err = svc.stats(&alice).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "You don't have permission to view system statistics"
        );
    }
}
