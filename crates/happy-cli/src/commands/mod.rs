pub mod admin;
pub mod analyze;
pub mod auth;
pub mod delete;
pub mod dispatch;
pub mod log;
pub mod shared;
pub mod show;
pub mod tag;
pub mod update;
pub mod write;

use serde::Serialize;

/// Response for commands that remove a record.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
    pub id: String,
}

impl DeletedResponse {
    fn new(id: &str) -> Self {
        Self {
            deleted: true,
            id: id.to_string(),
        }
    }
}
