use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Default, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    username: Option<String>,
    role: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match happy_auth::resolve_and_validate(&ctx.config.auth.secret_key) {
        Ok(Some(claims)) => AuthStatusResponse {
            authenticated: true,
            expires_at: Some(claims.expires_at().to_rfc3339()),
            role: Some(claims.role.to_string()),
            user_id: Some(claims.user_id),
            username: Some(claims.username),
            token_source: happy_auth::token_store::detect_token_source()
                .map(|source| source.as_str().to_string()),
            note: None,
        },
        Ok(None) => AuthStatusResponse {
            note: Some(missing_token_note()),
            ..AuthStatusResponse::default()
        },
        Err(error) => AuthStatusResponse {
            note: Some(error.to_string()),
            ..AuthStatusResponse::default()
        },
    };

    output(&status, flags.format)
}

/// A stored token that failed validation here can only have expired.
fn missing_token_note() -> String {
    happy_auth::resolve_token()
        .and_then(|token| happy_auth::refresh::decode_expiry(&token).ok())
        .map_or_else(
            || "no token found".to_string(),
            |expired| format!("token expired at {}", expired.to_rfc3339()),
        )
}
