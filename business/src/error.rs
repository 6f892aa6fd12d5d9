use std::path::PathBuf;

use thiserror::Error;
use ustr::Ustr;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No users selected")]
    NoUsersSelected,
    #[error(
        "Deletion failed because some users were either enabled or do not exist: {}",
        join_logins(.logins)
    )]
    EnabledUsersNotDeletable { logins: Vec<Ustr> },
    #[error("Failed to read directory file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid directory JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_logins(logins: &[Ustr]) -> String {
    logins
        .iter()
        .map(Ustr::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
