//! Users table with row selection.
//!
//! Rows are the users that pass the current filters. Selection is reported
//! back as [`SelectionChange`]s so the caller can apply them once the frame
//! no longer borrows the users.

use egui::{Grid, RichText, ScrollArea, Ui};
use roster_business::{UserFilters, Users};
use ustr::Ustr;

use crate::utils::colors::{COLOR_GREEN, COLOR_MUTED, COLOR_RED};
use crate::utils::test_attrs::{USERS_TABLE, set_test_attr};

const HEADERS: [&str; 6] = ["Username", "Display name", "Roles", "Admin", "Email", "Status"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// Select or unselect every visible row.
    All { logins: Vec<Ustr>, checked: bool },
    Row { login: Ustr, checked: bool },
}

impl SelectionChange {
    pub fn apply(self, users: &mut Users) {
        match self {
            Self::All { logins, checked } => users.select_all(&logins, checked),
            Self::Row { login, checked } => {
                users.set_selected(login, checked);
            }
        }
    }
}

pub fn users_table(ui: &mut Ui, users: &Users, filters: &UserFilters) -> Option<SelectionChange> {
    let visible = users.filtered(filters);
    set_test_attr(ui.ctx(), USERS_TABLE, "rows", visible.len());

    if visible.is_empty() {
        ui.label(RichText::new("No users match the current filters.").color(COLOR_MUTED));
        return None;
    }

    let logins: Vec<Ustr> = visible.iter().map(|user| user.login_name).collect();
    let mut change = None;

    ScrollArea::vertical().show(ui, |ui| {
        Grid::new(USERS_TABLE)
            .num_columns(HEADERS.len() + 1)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                let mut all_checked = users.are_all_selected(&logins);
                if ui
                    .checkbox(&mut all_checked, "")
                    .on_hover_text("Select all")
                    .changed()
                {
                    change = Some(SelectionChange::All {
                        logins: logins.clone(),
                        checked: all_checked,
                    });
                }
                for header in HEADERS {
                    ui.strong(header);
                }
                ui.end_row();

                for user in &visible {
                    let mut checked = user.checked;
                    if ui
                        .checkbox(&mut checked, "")
                        .on_hover_text(format!("Select {}", user.login_name))
                        .changed()
                    {
                        change = Some(SelectionChange::Row {
                            login: user.login_name,
                            checked,
                        });
                    }
                    ui.label(user.login_name.as_str());
                    ui.label(user.display_name.as_deref().unwrap_or("-"));
                    let roles: Vec<&str> = user.roles.iter().map(Ustr::as_str).collect();
                    ui.label(roles.join(", "));
                    ui.label(if user.is_admin { "Yes" } else { "No" });
                    ui.label(user.email.as_deref().unwrap_or("-"));
                    if user.enabled {
                        ui.label(RichText::new("Active").color(COLOR_GREEN));
                    } else {
                        ui.label(RichText::new("Inactive").color(COLOR_RED));
                    }
                    ui.end_row();
                }
            });
    });

    change
}
