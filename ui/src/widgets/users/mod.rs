mod actions_widget;
mod filters_view;
mod users_table;

pub use actions_widget::{UsersActionsAttrs, UsersActionsWidget};
pub use filters_view::filters_view;
pub use users_table::{SelectionChange, users_table};
