//! Domain models behind the user management admin panel.
//!
//! UI code reads these and reports operator intent through
//! [`BulkActionHandler`]; it never mutates [`Users`] directly while drawing.

mod bulk_action;
mod config;
mod directory;
mod error;
mod roles;
mod user_filters;
mod users;

pub use bulk_action::{BulkAction, BulkActionHandler, BulkActionQueue, BulkOutcome, BulkRequest};
pub use config::RosterConfig;
pub use directory::Directory;
pub use error::Error;
pub use roles::{RoleKind, RoleRef, Roles};
pub use user_filters::UserFilters;
pub use users::{UserItem, Users};
