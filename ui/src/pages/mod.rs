//! Pages module for the application.
//!
//! - `users_page`: action bar, filter drop-down and the users table

mod users_page;

pub use users_page::users_page;
