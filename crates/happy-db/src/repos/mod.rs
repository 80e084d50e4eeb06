//! Repository modules implementing the journal operations.
//!
//! Each module adds methods to `JournalService` via `impl JournalService` blocks.

pub mod entry;
pub mod stats;
pub mod tag;
pub mod user;
