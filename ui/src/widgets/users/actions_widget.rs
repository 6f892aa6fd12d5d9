//! Action bar above the users table.
//!
//! Layout, left to right: bulk action buttons, user counts, search box and
//! the `Filters` toggle with its drop-down underneath.

use egui::{Button, Response, Ui};
use log::debug;
use roster_business::{BulkAction, BulkActionHandler, Roles, UserFilters, Users};
use roster_states::{Observable, ObservableReader};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};
use crate::utils::test_attrs::{FILTERS_BTN, SEARCH_BOX, USER_ACTIONS, USERS_COUNTS, set_test_attr};
use crate::widgets::counts::{CountItem, counts};
use crate::widgets::forms::search_field;
use crate::widgets::users::filters_view;

/// Everything the action bar draws from, supplied by the page each frame.
pub struct UsersActionsAttrs<'a> {
    pub users: &'a Users,
    pub roles: &'a Roles,
    pub user_filters: &'a UserFilters,
    pub handler: &'a mut dyn BulkActionHandler,
}

/// Action bar widget.
///
/// Owns the filter panel visibility; [`toggle_filters_view`] is the only
/// writer, and the panel only ever sees a reader.
///
/// [`toggle_filters_view`]: UsersActionsWidget::toggle_filters_view
#[derive(Debug)]
pub struct UsersActionsWidget {
    show_filters: Observable<bool>,
}

impl Default for UsersActionsWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl UsersActionsWidget {
    /// Starts with the filter panel hidden.
    pub fn new() -> Self {
        Self {
            show_filters: Observable::new(false),
        }
    }

    /// Starts with the filter panel in the given state.
    pub fn with_filters_open(open: bool) -> Self {
        Self {
            show_filters: Observable::new(open),
        }
    }

    pub fn toggle_filters_view(&self) {
        self.show_filters.update(|show| *show = !*show);
        debug!("Filters view toggled, visible: {}", self.show_filters.get());
    }

    pub fn show_filters(&self) -> ObservableReader<bool> {
        self.show_filters.reader()
    }

    pub fn show(&self, ui: &mut Ui, attrs: UsersActionsAttrs<'_>) -> Response {
        let UsersActionsAttrs {
            users,
            roles,
            user_filters,
            handler,
        } = attrs;

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                render_bulk_actions(ui, users, handler);
                ui.separator();
                render_counts(ui, users);
                ui.separator();
                search_field(ui, &user_filters.search_text, SEARCH_BOX);
                let filters_btn = ui.push_id(FILTERS_BTN, |ui| ui.button("Filters")).inner;
                let hint = filters_hint(self.show_filters.get());
                if filters_btn.on_hover_text(hint).clicked() {
                    self.toggle_filters_view();
                }
            });
            filters_view(ui, &self.show_filters(), user_filters, roles);
        })
        .response
    }
}

fn filters_hint(visible: bool) -> &'static str {
    if visible {
        "Hide filters"
    } else {
        "Show filters"
    }
}

fn render_bulk_actions(ui: &mut Ui, users: &Users, handler: &mut dyn BulkActionHandler) {
    let enabled = users.any_user_selected();
    set_test_attr(ui.ctx(), USER_ACTIONS, "enabled", enabled);
    for action in BulkAction::ALL {
        if ui.add_enabled(enabled, Button::new(action.label())).clicked() {
            debug!("{action} clicked");
            handler.on_bulk_action(action, users);
        }
    }
}

fn render_counts(ui: &mut Ui, users: &Users) {
    counts(
        ui,
        USERS_COUNTS,
        &[
            CountItem::new("Total", users.total_users_count()),
            CountItem::new("Enabled", users.enabled_users_count()).color(COLOR_GREEN),
            CountItem::new("Disabled", users.disabled_users_count()).color(COLOR_RED),
        ],
    );
}
