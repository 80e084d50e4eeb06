//! Tag repository.

use chrono::{SubsecRound, Utc};

use happy_core::entities::Tag;
use happy_core::identity::AuthIdentity;
use happy_core::ids::PREFIX_TAG;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime};
use crate::service::JournalService;

fn row_to_tag(row: &libsql::Row) -> Result<Tag, DatabaseError> {
    Ok(Tag {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        user_id: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl JournalService {
    pub async fn create_tag(&self, caller: &AuthIdentity, name: &str) -> Result<Tag, DatabaseError> {
        Self::require_writer(caller, "create tags")?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DatabaseError::validation("tag name must not be empty"));
        }

        let now = Utc::now().trunc_subsecs(6);
        let id = self.db().generate_id(PREFIX_TAG).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO tags (id, name, user_id, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    id.as_str(),
                    name,
                    caller.user_id.as_str(),
                    format_datetime(&now)
                ],
            )
            .await?;

        tracing::debug!(tag_id = %id, name, user_id = %caller.user_id, "created tag");

        Ok(Tag {
            id,
            name: name.to_string(),
            user_id: caller.user_id.clone(),
            created_at: now,
        })
    }

    /// The caller's own tags, oldest first.
    pub async fn list_tags(
        &self,
        caller: &AuthIdentity,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Tag>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, user_id, created_at FROM tags
                 WHERE user_id = ?1 ORDER BY created_at, rowid LIMIT ?2 OFFSET ?3",
                libsql::params![caller.user_id.as_str(), i64::from(limit), i64::from(skip)],
            )
            .await?;
        let mut tags = Vec::new();
        while let Some(row) = rows.next().await? {
            tags.push(row_to_tag(&row)?);
        }
        Ok(tags)
    }

    pub async fn get_tag(&self, caller: &AuthIdentity, id: &str) -> Result<Tag, DatabaseError> {
        let tag = self.load_tag(id).await?;
        Self::require_owner(caller, &tag.user_id, "access this tag")?;
        Ok(tag)
    }

    /// Delete a tag and detach it from every entry.
    pub async fn delete_tag(&self, caller: &AuthIdentity, id: &str) -> Result<(), DatabaseError> {
        let tag = self.load_tag(id).await?;
        Self::require_owner(caller, &tag.user_id, "delete this tag")?;
        Self::require_writer(caller, "delete tags")?;

        self.db()
            .conn()
            .execute("DELETE FROM tags WHERE id = ?1", [id])
            .await?;
        tracing::debug!(tag_id = id, user_id = %caller.user_id, "deleted tag");
        Ok(())
    }

    /// Fetch without a permission check.
    pub(crate) async fn load_tag(&self, id: &str) -> Result<Tag, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, user_id, created_at FROM tags WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Tag", id))?;
        row_to_tag(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_identity, test_service};
    use happy_core::enums::Role;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_and_list_own_tags() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let bob = seed_identity(&svc, "bob", Role::Writer).await;

        let work = svc.create_tag(&alice, " work ").await.unwrap();
        assert_eq!(work.name, "work");
        svc.create_tag(&alice, "health").await.unwrap();
        svc.create_tag(&bob, "travel").await.unwrap();

        let names: Vec<String> = svc
            .list_tags(&alice, 0, 50)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["work".to_string(), "health".to_string()]);

        let paged = svc.list_tags(&alice, 1, 50).await.unwrap();
        assert_eq!(paged.len(), 1);
        assert_eq!(paged[0].name, "health");
    }

    #[tokio::test]
    async fn visitors_cannot_create_tags() {
        let svc = test_service().await;
        let visitor = seed_identity(&svc, "guest", Role::Visitor).await;
        let err = svc.create_tag(&visitor, "work").await.unwrap_err();
        assert_eq!(err.to_string(), "You don't have permission to create tags");
    }

    #[tokio::test]
    async fn empty_tag_name_is_invalid() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        assert!(svc.create_tag(&alice, "  ").await.is_err());
    }

    #[tokio::test]
    async fn foreign_tags_are_forbidden_except_for_admins() {
        let svc = test_service().await;
        let alice = seed_identity(&svc, "alice", Role::Writer).await;
        let bob = seed_identity(&svc, "bob", Role::Writer).await;
        let admin = seed_identity(&svc, "root", Role::Admin).await;
        let tag = svc.create_tag(&alice, "work").await.unwrap();

        assert!(svc.get_tag(&bob, &tag.id).await.unwrap_err().is_forbidden());
        assert!(svc.delete_tag(&bob, &tag.id).await.unwrap_err().is_forbidden());
        assert_eq!(svc.get_tag(&admin, &tag.id).await.unwrap(), tag);

        svc.delete_tag(&admin, &tag.id).await.unwrap();
        assert!(svc.get_tag(&alice, &tag.id).await.unwrap_err().is_not_found());
    }
}
