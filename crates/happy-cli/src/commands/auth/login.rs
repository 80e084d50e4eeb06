use happy_auth::AuthError;
use happy_core::identity::AuthIdentity;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    username: String,
    role: String,
    token_type: String,
    access_token: String,
    expires_in: u64,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = login(args, ctx).await?;
    happy_auth::token_store::store(&response.access_token)?;
    tracing::info!(user_id = %response.user_id, session = args.session, "logged in");
    output(&response, flags.format)
}

async fn login(args: &AuthLoginArgs, ctx: &AppContext) -> anyhow::Result<AuthLoginResponse> {
    let user = ctx
        .service
        .authenticate(&args.username, &args.password)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let ttl = if args.session {
        ctx.config.auth.session_ttl_secs
    } else {
        ctx.config.auth.cli_ttl_secs
    };
    let identity = AuthIdentity {
        user_id: user.id,
        username: user.username,
        role: user.role,
    };
    let issued = happy_auth::token::issue(&identity, &ctx.config.auth.secret_key, ttl)?;

    Ok(AuthLoginResponse {
        authenticated: true,
        user_id: issued.user_id,
        username: issued.username,
        role: issued.role.to_string(),
        token_type: issued.token_type,
        access_token: issued.access_token,
        expires_in: issued.expires_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::shared::testing::{identity, test_context};
    use happy_core::enums::Role;

    fn args(password: &str, session: bool) -> AuthLoginArgs {
        AuthLoginArgs {
            username: "alice".into(),
            password: password.into(),
            session,
        }
    }

    #[tokio::test]
    async fn cli_and_session_tokens_use_configured_lifetimes() {
        let ctx = test_context().await;
        identity(&ctx, "alice", Role::Writer).await;

        let cli = login(&args("password123", false), &ctx).await.unwrap();
        assert_eq!(cli.expires_in, ctx.config.auth.cli_ttl_secs);
        assert_eq!(cli.token_type, "bearer");

        let session = login(&args("password123", true), &ctx).await.unwrap();
        assert_eq!(session.expires_in, ctx.config.auth.session_ttl_secs);

        let claims =
            happy_auth::token::verify(&session.access_token, &ctx.config.auth.secret_key).unwrap();
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let ctx = test_context().await;
        identity(&ctx, "alice", Role::Writer).await;
        let err = login(&args("nope", false), &ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "Incorrect username or password");
    }
}
