use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthBearerResponse {
    authenticated: bool,
    message: String,
    user_id: String,
    username: String,
    role: String,
    expires_at: String,
}

/// Verify a pasted token and store it for later commands.
pub async fn handle(token: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = verify(token, ctx).await?;
    happy_auth::token_store::store(token)?;
    tracing::info!(user_id = %response.user_id, "stored bearer token");
    output(&response, flags.format)
}

async fn verify(token: &str, ctx: &AppContext) -> anyhow::Result<AuthBearerResponse> {
    let claims = happy_auth::token::verify(token, &ctx.config.auth.secret_key)?;
    let user = ctx.service.get_user(&claims.user_id).await?;

    Ok(AuthBearerResponse {
        authenticated: true,
        message: format!(
            "Authenticated user: {} with role: {}",
            user.username, user.role
        ),
        user_id: user.id,
        username: user.username,
        role: user.role.to_string(),
        expires_at: claims.expires_at().to_rfc3339(),
    })
}
