use anyhow::Context;
use happy_auth::AuthError;
use happy_core::identity::AuthIdentity;

use crate::context::AppContext;

/// Resolve the caller from the stored bearer token.
///
/// The token must verify against the configured key and name a user that
/// still exists. The stored role wins over the role baked into the token.
pub async fn require_identity(ctx: &AppContext) -> anyhow::Result<AuthIdentity> {
    let token = happy_auth::resolve_token().ok_or(AuthError::NotAuthenticated)?;
    let claims = happy_auth::token::verify(&token, &ctx.config.auth.secret_key)?;

    let user = ctx
        .service
        .get_user(&claims.user_id)
        .await
        .with_context(|| format!("token names user {} who no longer exists", claims.user_id))?;

    if claims.role != user.role {
        tracing::warn!(
            user_id = %user.id,
            token_role = %claims.role,
            current_role = %user.role,
            "token role is stale"
        );
    }
    Ok(AuthIdentity {
        user_id: user.id,
        username: user.username,
        role: user.role,
    })
}
