//! Service layer pairing the journal database with enrichment.
//!
//! `JournalService` wraps `JournalDb` (raw database access) and an `Enricher`
//! (scoring and markers). All repo methods are implemented as
//! `impl JournalService` blocks under [`crate::repos`].

use happy_core::identity::AuthIdentity;
use happy_enrich::Enricher;

use crate::JournalDb;
use crate::error::DatabaseError;

/// Permission-checking facade over the journal tables.
///
/// Every method that acts on behalf of a user takes the caller's
/// [`AuthIdentity`] and checks role and ownership before touching rows.
pub struct JournalService {
    db: JournalDb,
    enricher: Enricher,
}

impl JournalService {
    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `enricher` - Scoring strategy applied to new and edited entries.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, enricher: Enricher) -> Result<Self, DatabaseError> {
        let db = JournalDb::open_local(db_path).await?;
        Ok(Self { db, enricher })
    }

    /// Create from an existing `JournalDb` (for testing).
    #[must_use]
    pub const fn from_db(db: JournalDb, enricher: Enricher) -> Self {
        Self { db, enricher }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &JournalDb {
        &self.db
    }

    #[must_use]
    pub const fn enricher(&self) -> &Enricher {
        &self.enricher
    }

    pub(crate) fn require_writer(caller: &AuthIdentity, action: &str) -> Result<(), DatabaseError> {
        if caller.role.can_write() {
            Ok(())
        } else {
            Err(DatabaseError::forbidden(action))
        }
    }

    pub(crate) fn require_admin(caller: &AuthIdentity, action: &str) -> Result<(), DatabaseError> {
        if caller.role.is_admin() {
            Ok(())
        } else {
            Err(DatabaseError::forbidden(action))
        }
    }

    pub(crate) fn require_owner(
        caller: &AuthIdentity,
        owner_id: &str,
        action: &str,
    ) -> Result<(), DatabaseError> {
        if caller.owns_or_admin(owner_id) {
            Ok(())
        } else {
            Err(DatabaseError::forbidden(action))
        }
    }
}
