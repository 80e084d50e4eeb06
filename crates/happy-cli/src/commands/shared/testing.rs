//! In-memory contexts for command tests.

use happy_config::HappyConfig;
use happy_core::enums::Role;
use happy_core::identity::AuthIdentity;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;

pub fn flags() -> GlobalFlags {
    GlobalFlags {
        format: OutputFormat::Json,
        limit: None,
        quiet: true,
        verbose: false,
        db: Some(":memory:".into()),
    }
}

pub async fn test_context() -> AppContext {
    AppContext::init(HappyConfig::default(), &flags())
        .await
        .unwrap()
}

pub async fn identity(ctx: &AppContext, username: &str, role: Role) -> AuthIdentity {
    let user = ctx
        .service
        .create_user(username, "password123", role)
        .await
        .unwrap();
    AuthIdentity {
        user_id: user.id,
        username: user.username,
        role: user.role,
    }
}
