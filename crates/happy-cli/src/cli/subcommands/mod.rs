pub mod admin;
pub mod auth;
pub mod tag;

pub use admin::AdminCommands;
pub use auth::AuthCommands;
pub use tag::TagCommands;
