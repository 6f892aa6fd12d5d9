//! Integration tests for the filter drop-down toggle.
//!
//! These tests verify:
//! 1. The drop-down is hidden by default
//! 2. The `Filters` button toggles it in the running app
//! 3. Filter values survive while the drop-down is hidden

use crate::common::TestCtx;
use kittest::Queryable;
use roster_ui::RosterApp;
use roster_ui::utils::test_attrs::{FILTER_BY_ROLES, FILTERS_VIEW, test_attr};

mod common;

fn filters_visible(harness: &egui_kittest::Harness<'_, RosterApp>) -> Option<bool> {
    test_attr(&harness.ctx, FILTERS_VIEW, "visible")
}

#[test]
fn test_filters_hidden_by_default() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    harness.run();

    assert_eq!(filters_visible(harness), Some(false));
    assert!(harness.query_by_label("Filter By").is_none());
}

#[test]
fn test_filters_button_toggles_drop_down() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    harness.run();

    harness.get_by_label("Filters").click();
    harness.run();
    assert_eq!(filters_visible(harness), Some(true));
    assert_eq!(
        test_attr::<usize>(&harness.ctx, FILTER_BY_ROLES, "count"),
        Some(3)
    );
    assert!(harness.query_by_label("ldap-admins").is_some());

    harness.get_by_label("Filters").click();
    harness.run();
    assert_eq!(filters_visible(harness), Some(false));
}

#[test]
fn test_filter_values_survive_hiding() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    harness.run();

    harness.get_by_label("Filters").click();
    harness.run();
    harness.get_by_label("Disabled").click();
    harness.run();

    harness.get_by_label("Filters").click();
    harness.run();

    let filters = harness.state().state().user_filters();
    assert!(filters.disabled_users.get());
    assert!(filters.any_filters_applied());
}
