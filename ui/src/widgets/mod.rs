pub mod counts;
pub mod flash;
pub mod forms;
pub mod users;

pub use counts::{CountItem, counts};
pub use flash::{FlashMessage, flash};
pub use forms::{checkbox_field, search_field};
pub use users::{
    SelectionChange, UsersActionsAttrs, UsersActionsWidget, filters_view, users_table,
};
