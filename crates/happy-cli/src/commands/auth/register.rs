use happy_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthRegisterResponse {
    created: bool,
    user_id: String,
    username: String,
    role: String,
}

/// Self-service registration always yields a writer.
pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx
        .service
        .create_user(&args.username, &args.password, Role::Writer)
        .await?;
    tracing::info!(user_id = %user.id, username = %user.username, "registered user");

    output(
        &AuthRegisterResponse {
            created: true,
            user_id: user.id,
            username: user.username,
            role: user.role.to_string(),
        },
        flags.format,
    )
}
