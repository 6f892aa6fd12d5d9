//! Test attributes published while drawing.
//!
//! egui has no DOM to put `data-test-*` attributes on, so widgets publish
//! the values tests want to inspect into the context's temporary memory,
//! keyed by a stable test id and an attribute name.

use egui::{Context, Id};

pub const FILTERS_VIEW: &str = "filters-view";
pub const FILTER_BY_ROLES: &str = "filter-by-roles";
pub const FILTERS_BTN: &str = "filters-btn";
pub const RESET_FILTER_BTN: &str = "reset-filter-btn";
pub const SEARCH_BOX: &str = "search-box";
pub const USERS_COUNTS: &str = "users";
pub const USER_ACTIONS: &str = "user-actions";
pub const USERS_TABLE: &str = "users-table";

fn attr_id(test_id: &str, attr: &str) -> Id {
    Id::new(test_id).with(attr)
}

pub fn set_test_attr<T>(ctx: &Context, test_id: &str, attr: &str, value: T)
where
    T: Clone + Send + Sync + 'static,
{
    ctx.data_mut(|data| data.insert_temp(attr_id(test_id, attr), value));
}

pub fn test_attr<T>(ctx: &Context, test_id: &str, attr: &str) -> Option<T>
where
    T: Clone + Send + Sync + 'static,
{
    ctx.data(|data| data.get_temp::<T>(attr_id(test_id, attr)))
}
