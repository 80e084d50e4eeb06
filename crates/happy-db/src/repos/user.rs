//! User repository: registration, login lookup, and admin management.

use chrono::{SubsecRound, Utc};

use happy_auth::password;
use happy_core::entities::User;
use happy_core::enums::Role;
use happy_core::identity::AuthIdentity;
use happy_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime, parse_enum};
use crate::service::JournalService;

/// Username seeded by [`JournalService::ensure_demo_user`].
pub const DEMO_USERNAME: &str = "demo";
pub const DEMO_PASSWORD: &str = "password123";

const USER_COLUMNS: &str = "id, username, password_hash, role, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<String>(0)?,
        username: row.get::<String>(1)?,
        password_hash: row.get::<String>(2)?,
        role: parse_enum(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl JournalService {
    /// Register a user with an argon2-hashed password.
    ///
    /// # Errors
    ///
    /// - `Conflict("Username already exists")` for a taken username.
    /// - `Core(Validation)` for a blank username or empty password.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<User, DatabaseError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DatabaseError::validation("username must not be empty"));
        }
        if password.is_empty() {
            return Err(DatabaseError::validation("password must not be empty"));
        }
        if self.find_user_by_username(username).await?.is_some() {
            return Err(DatabaseError::Conflict("Username already exists".into()));
        }

        let password_hash = password::hash(password)?;
        let now = Utc::now().trunc_subsecs(6);
        let id = self.db().generate_id(PREFIX_USER).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO users ({USER_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
                libsql::params![
                    id.as_str(),
                    username,
                    password_hash.as_str(),
                    role.as_str(),
                    format_datetime(&now)
                ],
            )
            .await?;

        tracing::debug!(user_id = %id, username, role = %role, "created user");

        Ok(User {
            id,
            username: username.to_string(),
            password_hash,
            role,
            created_at: now,
        })
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("User", id))?;
        row_to_user(&row)
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1"),
                [username],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Check a username and password pair.
    ///
    /// Returns `Ok(None)` for an unknown user or a wrong password; the two
    /// cases are indistinguishable to the caller.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let Some(user) = self.find_user_by_username(username.trim()).await? else {
            tracing::warn!(username, "login attempt for unknown user");
            return Ok(None);
        };
        if !password::verify(password, &user.password_hash)? {
            tracing::warn!(username, "login attempt with wrong password");
            return Ok(None);
        }
        Ok(Some(user))
    }

    pub async fn list_users(&self, caller: &AuthIdentity) -> Result<Vec<User>, DatabaseError> {
        Self::require_admin(caller, "list users")?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at, rowid"),
                (),
            )
            .await?;
        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    /// Remove a user together with their entries and tags.
    pub async fn delete_user(&self, caller: &AuthIdentity, id: &str) -> Result<(), DatabaseError> {
        Self::require_admin(caller, "delete users")?;
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM users WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("User", id));
        }
        tracing::debug!(user_id = id, deleted_by = %caller.user_id, "deleted user");
        Ok(())
    }

    /// Seed the demo account when it does not exist yet.
    pub async fn ensure_demo_user(&self) -> Result<User, DatabaseError> {
        if let Some(user) = self.find_user_by_username(DEMO_USERNAME).await? {
            return Ok(user);
        }
        let user = self
            .create_user(DEMO_USERNAME, DEMO_PASSWORD, Role::Writer)
            .await?;
        tracing::info!(user_id = %user.id, "seeded demo user");
        Ok(user)
    }
}
