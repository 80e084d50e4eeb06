//! Entity structs for the GitHappy journal.
//!
//! Each entity maps to a table in the libSQL database (see
//! `happy-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod entry;
mod tag;
mod user;

pub use entry::Entry;
pub use tag::Tag;
pub use user::User;
