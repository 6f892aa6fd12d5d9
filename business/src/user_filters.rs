//! Filters applied to the users table.
//!
//! Every criterion is a reactive cell so that form fields can bind to it
//! through [`Property`](roster_states::Property) and other widgets see the
//! change on the next frame. Criteria are independent of each other; the
//! combination rules live in [`UserFilters::matches`].

use std::any::Any;
use std::cell::RefCell;
use std::collections::BTreeMap;

use log::debug;
use roster_states::{Observable, State};
use ustr::Ustr;

use crate::{Roles, UserItem};

#[derive(Debug, Default)]
pub struct UserFilters {
    pub search_text: Observable<String>,
    pub super_admins: Observable<bool>,
    pub normal_users: Observable<bool>,
    pub enabled_users: Observable<bool>,
    pub disabled_users: Observable<bool>,
    selected_roles: RefCell<BTreeMap<Ustr, Observable<bool>>>,
}

impl State for UserFilters {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl UserFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection cell for `role`, created unchecked on first use.
    pub fn role_selection_for(&self, role: impl Into<Ustr>) -> Observable<bool> {
        self.selected_roles
            .borrow_mut()
            .entry(role.into())
            .or_default()
            .clone()
    }

    pub fn is_role_selected(&self, role: Ustr) -> bool {
        self.selected_roles
            .borrow()
            .get(&role)
            .is_some_and(Observable::get)
    }

    pub fn selected_role_names(&self) -> Vec<Ustr> {
        self.selected_roles
            .borrow()
            .iter()
            .filter(|(_, selected)| selected.get())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Number of roles with a selection entry, checked or not.
    pub fn tracked_roles(&self) -> usize {
        self.selected_roles.borrow().len()
    }

    /// Drops selection entries of roles that are no longer in `roles`.
    ///
    /// Returns how many entries were removed.
    pub fn reconcile_roles(&self, roles: &Roles) -> usize {
        let mut selected = self.selected_roles.borrow_mut();
        let before = selected.len();
        selected.retain(|name, _| roles.contains(*name));
        let removed = before - selected.len();
        if removed > 0 {
            debug!("Dropped {removed} stale role filter(s)");
        }
        removed
    }

    /// Clears every toggle and the search text.
    ///
    /// Role entries are kept but unchecked, so cells already handed out stay
    /// bound.
    pub fn reset_filters(&self) {
        self.search_text.set(String::new());
        self.super_admins.set(false);
        self.normal_users.set(false);
        self.enabled_users.set(false);
        self.disabled_users.set(false);
        for selected in self.selected_roles.borrow().values() {
            selected.set(false);
        }
        debug!("User filters reset");
    }

    pub fn any_filters_applied(&self) -> bool {
        !self.search_text.get().trim().is_empty()
            || self.super_admins.get()
            || self.normal_users.get()
            || self.enabled_users.get()
            || self.disabled_users.get()
            || !self.selected_role_names().is_empty()
    }

    /// `true` when `user` passes every active criterion.
    pub fn matches(&self, user: &UserItem) -> bool {
        self.search_matches(user)
            && self.privilege_matches(user)
            && self.state_matches(user)
            && self.role_matches(user)
    }

    pub fn perform_filtering_on<'a>(
        &self,
        users: impl IntoIterator<Item = &'a UserItem>,
    ) -> Vec<&'a UserItem> {
        users.into_iter().filter(|user| self.matches(user)).collect()
    }

    fn search_matches(&self, user: &UserItem) -> bool {
        let search = self.search_text.get();
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let contains = |value: &str| value.to_lowercase().contains(&needle);
        contains(user.login_name.as_str())
            || user.display_name.as_deref().is_some_and(contains)
            || user.email.as_deref().is_some_and(contains)
    }

    // Exactly one box narrows the list; none or both keep everyone.
    fn privilege_matches(&self, user: &UserItem) -> bool {
        match (self.super_admins.get(), self.normal_users.get()) {
            (true, false) => user.is_admin,
            (false, true) => !user.is_admin,
            _ => true,
        }
    }

    fn state_matches(&self, user: &UserItem) -> bool {
        match (self.enabled_users.get(), self.disabled_users.get()) {
            (true, false) => user.enabled,
            (false, true) => !user.enabled,
            _ => true,
        }
    }

    fn role_matches(&self, user: &UserItem) -> bool {
        let selected = self.selected_role_names();
        selected.is_empty() || selected.iter().any(|role| user.has_role(*role))
    }
}
