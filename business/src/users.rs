//! User records and the collection the admin panel renders from.

use std::any::Any;

use log::{info, warn};
use roster_states::State;
use serde::{Deserialize, Serialize};
use ustr::{Ustr, UstrSet};

use crate::{BulkAction, BulkOutcome, BulkRequest, Error, UserFilters};

fn enabled_by_default() -> bool {
    true
}

/// A single user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct UserItem {
    /// Unique key of the user.
    #[builder(into)]
    pub login_name: Ustr,

    #[builder(into)]
    #[serde(default)]
    pub display_name: Option<String>,

    #[builder(into)]
    #[serde(default)]
    pub email: Option<String>,

    #[builder(default)]
    #[serde(default)]
    pub is_admin: bool,

    #[builder(default = true)]
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,

    /// Names of the roles the user belongs to.
    #[builder(default)]
    #[serde(default)]
    pub roles: Vec<Ustr>,

    /// Row selection in the users table, never persisted.
    #[builder(default)]
    #[serde(skip)]
    pub checked: bool,
}

impl UserItem {
    pub fn has_role(&self, role: Ustr) -> bool {
        self.roles.contains(&role)
    }

    /// Display name when present, login name otherwise.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.login_name.as_str())
    }
}

/// All users known to the admin panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Users {
    items: Vec<UserItem>,
}

impl State for Users {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl FromIterator<UserItem> for Users {
    fn from_iter<I: IntoIterator<Item = UserItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Users {
    type Item = &'a UserItem;
    type IntoIter = std::slice::Iter<'a, UserItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Users {
    /// Builds the collection keyed by login name.
    ///
    /// A login listed more than once keeps its first row; later ones are
    /// dropped with a warning.
    pub fn new(items: Vec<UserItem>) -> Self {
        let mut seen = UstrSet::default();
        let items = items
            .into_iter()
            .filter(|user| {
                let first = seen.insert(user.login_name);
                if !first {
                    warn!("Ignoring duplicate user {}", user.login_name);
                }
                first
            })
            .collect();
        Self { items }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UserItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, login: Ustr) -> Option<&UserItem> {
        self.items.iter().find(|user| user.login_name == login)
    }

    pub fn total_users_count(&self) -> usize {
        self.items.len()
    }

    pub fn enabled_users_count(&self) -> usize {
        self.items.iter().filter(|user| user.enabled).count()
    }

    pub fn disabled_users_count(&self) -> usize {
        self.items.iter().filter(|user| !user.enabled).count()
    }

    pub fn any_user_selected(&self) -> bool {
        self.items.iter().any(|user| user.checked)
    }

    pub fn selected_users(&self) -> impl Iterator<Item = &UserItem> {
        self.items.iter().filter(|user| user.checked)
    }

    pub fn selected_logins(&self) -> Vec<Ustr> {
        self.selected_users().map(|user| user.login_name).collect()
    }

    /// Returns `false` when no user has that login.
    pub fn set_selected(&mut self, login: Ustr, checked: bool) -> bool {
        match self.items.iter_mut().find(|user| user.login_name == login) {
            Some(user) => {
                user.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn toggle_selection(&mut self, login: Ustr) {
        if let Some(user) = self.items.iter_mut().find(|user| user.login_name == login) {
            user.checked = !user.checked;
        }
    }

    /// Sets the selection of the given logins only, so a caller can select
    /// just the rows currently shown.
    pub fn select_all(&mut self, logins: &[Ustr], checked: bool) {
        for user in &mut self.items {
            if logins.contains(&user.login_name) {
                user.checked = checked;
            }
        }
    }

    /// `true` when `logins` is non-empty and every one of them is selected.
    pub fn are_all_selected(&self, logins: &[Ustr]) -> bool {
        !logins.is_empty()
            && logins
                .iter()
                .all(|login| self.get(*login).is_some_and(|user| user.checked))
    }

    pub fn clear_selection(&mut self) {
        for user in &mut self.items {
            user.checked = false;
        }
    }

    pub fn filtered(&self, filters: &UserFilters) -> Vec<&UserItem> {
        filters.perform_filtering_on(&self.items)
    }

    /// Applies a bulk request and clears the selection on success.
    pub fn apply(&mut self, request: &BulkRequest) -> Result<BulkOutcome, Error> {
        if request.logins.is_empty() {
            warn!("Rejected {} request without users", request.action);
            return Err(Error::NoUsersSelected);
        }

        let affected = match request.action {
            BulkAction::Enable => self.set_enabled(&request.logins, true),
            BulkAction::Disable => self.set_enabled(&request.logins, false),
            BulkAction::Delete => self.delete(&request.logins)?,
        };
        self.clear_selection();

        info!("Applied {} to {affected} user(s)", request.action);
        Ok(BulkOutcome {
            action: request.action,
            affected,
        })
    }

    fn set_enabled(&mut self, logins: &[Ustr], enabled: bool) -> usize {
        let mut affected = 0;
        for user in &mut self.items {
            if user.enabled != enabled && logins.contains(&user.login_name) {
                user.enabled = enabled;
                affected += 1;
            }
        }
        affected
    }

    fn delete(&mut self, logins: &[Ustr]) -> Result<usize, Error> {
        let rejected: Vec<Ustr> = logins
            .iter()
            .copied()
            .filter(|login| self.get(*login).is_none_or(|user| user.enabled))
            .collect();
        if !rejected.is_empty() {
            warn!("Refusing to delete enabled or unknown users: {rejected:?}");
            return Err(Error::EnabledUsersNotDeletable { logins: rejected });
        }

        let before = self.items.len();
        self.items.retain(|user| !logins.contains(&user.login_name));
        Ok(before - self.items.len())
    }
}
