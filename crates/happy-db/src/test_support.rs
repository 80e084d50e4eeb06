//! Shared test utilities for happy-db unit tests.

use happy_core::enums::Role;
use happy_core::identity::AuthIdentity;
use happy_enrich::Enricher;

use crate::JournalDb;
use crate::service::JournalService;

/// Create an in-memory service with keyword scoring.
pub async fn test_service() -> JournalService {
    let db = JournalDb::open_local(":memory:").await.unwrap();
    JournalService::from_db(db, Enricher::keyword())
}

/// Register a user and return the identity a verified token would carry.
pub async fn seed_identity(svc: &JournalService, username: &str, role: Role) -> AuthIdentity {
    let user = svc.create_user(username, "password123", role).await.unwrap();
    AuthIdentity {
        user_id: user.id,
        username: user.username,
        role: user.role,
    }
}
