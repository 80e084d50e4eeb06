mod bearer;
mod login;
mod logout;
mod register;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuthArgs;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `happy auth [--bearer <token>] [<subcommand>]`.
pub async fn handle(args: &AuthArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match (&args.bearer, &args.action) {
        (Some(token), _) => bearer::handle(token, ctx, flags).await,
        (None, Some(AuthCommands::Login(login))) => login::handle(login, ctx, flags).await,
        (None, Some(AuthCommands::Register(register))) => {
            register::handle(register, ctx, flags).await
        }
        (None, Some(AuthCommands::Status)) => status::handle(ctx, flags),
        (None, Some(AuthCommands::Logout)) => logout::handle(flags),
        (None, None) => anyhow::bail!(
            "No token provided. Pass --bearer <token>, or use `happy auth login`."
        ),
    }
}
