//! Filter drop-down of the users page.
//!
//! Drawn from three inputs only: the visibility cell owned by the action
//! bar, the shared [`UserFilters`], and the current role list. Nothing is
//! cached between frames, so a changed role list shows up on the next one.

use egui::{Frame, Margin, Response, RichText, Sense, Ui, Vec2};
use roster_business::{Roles, UserFilters};
use roster_states::ObservableReader;

use crate::utils::test_attrs::{FILTER_BY_ROLES, FILTERS_VIEW, RESET_FILTER_BTN, set_test_attr};
use crate::widgets::forms::checkbox_field;

pub fn filters_view(
    ui: &mut Ui,
    show_filters: &ObservableReader<bool>,
    user_filters: &UserFilters,
    roles: &Roles,
) -> Response {
    let visible = show_filters.get();
    set_test_attr(ui.ctx(), FILTERS_VIEW, "visible", visible);
    // Role checkboxes exist whether or not the panel is drawn.
    set_test_attr(ui.ctx(), FILTER_BY_ROLES, "count", roles.len());
    if !visible {
        return ui.allocate_response(Vec2::ZERO, Sense::hover());
    }

    Frame::group(ui.style())
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Filter By").strong());
                let reset = ui.push_id(RESET_FILTER_BTN, |ui| ui.link("Reset Filters")).inner;
                if reset.clicked() {
                    user_filters.reset_filters();
                }
            });
            ui.separator();

            ui.horizontal_top(|ui| {
                filter_group(ui, "Privileges", |ui| {
                    checkbox_field(ui, "Super Administrators", &user_filters.super_admins);
                    checkbox_field(ui, "Normal Users", &user_filters.normal_users);
                });
                filter_group(ui, "User state", |ui| {
                    checkbox_field(ui, "Enabled", &user_filters.enabled_users);
                    checkbox_field(ui, "Disabled", &user_filters.disabled_users);
                });
                filter_group(ui, "Roles", |ui| {
                    render_roles(ui, user_filters, roles);
                });
            });
        })
        .response
}

fn filter_group(ui: &mut Ui, heading: &str, add_contents: impl FnOnce(&mut Ui)) {
    ui.vertical(|ui| {
        ui.label(RichText::new(heading).strong());
        add_contents(ui);
    });
    ui.add_space(16.0);
}

fn render_roles(ui: &mut Ui, user_filters: &UserFilters, roles: &Roles) {
    let mut rendered = 0_usize;
    for role in roles {
        checkbox_field(
            ui,
            role.name.as_str(),
            &user_filters.role_selection_for(role.name),
        );
        rendered += 1;
    }
    if roles.is_empty() {
        ui.weak("No roles defined");
    }
    set_test_attr(ui.ctx(), FILTER_BY_ROLES, "count", rendered);
}
