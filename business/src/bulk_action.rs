//! Bulk enable / disable / delete requests issued from the action bar.

use std::fmt::{Display, Formatter};

use log::debug;
use ustr::Ustr;

use crate::Users;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkAction {
    Enable,
    Disable,
    Delete,
}

impl BulkAction {
    pub const ALL: [Self; 3] = [Self::Enable, Self::Disable, Self::Delete];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Enable => "Enable",
            Self::Disable => "Disable",
            Self::Delete => "Delete",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Self::Enable => "enabled",
            Self::Disable => "disabled",
            Self::Delete => "deleted",
        }
    }
}

impl Display for BulkAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One bulk action over a fixed set of logins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRequest {
    pub action: BulkAction,
    pub logins: Vec<Ustr>,
}

impl BulkRequest {
    pub fn new(action: BulkAction, logins: Vec<Ustr>) -> Self {
        Self { action, logins }
    }

    /// Request covering the users currently selected in `users`.
    pub fn for_selected(action: BulkAction, users: &Users) -> Self {
        Self::new(action, users.selected_logins())
    }
}

/// Result of a successfully applied [`BulkRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOutcome {
    pub action: BulkAction,
    /// Users whose state actually changed.
    pub affected: usize,
}

impl BulkOutcome {
    /// Message shown to the operator after the action went through.
    pub fn message(&self) -> String {
        format!("Users were {} successfully!", self.action.past_tense())
    }
}

/// Callbacks the action bar invokes, each with the current users.
pub trait BulkActionHandler {
    fn on_enable(&mut self, users: &Users);

    fn on_disable(&mut self, users: &Users);

    fn on_delete(&mut self, users: &Users);

    fn on_bulk_action(&mut self, action: BulkAction, users: &Users) {
        match action {
            BulkAction::Enable => self.on_enable(users),
            BulkAction::Disable => self.on_disable(users),
            BulkAction::Delete => self.on_delete(users),
        }
    }
}

/// Handler that records requests while a frame is drawn.
///
/// The users are borrowed during rendering, so requests are applied once the
/// frame is done.
#[derive(Debug, Default)]
pub struct BulkActionQueue {
    pending: Vec<BulkRequest>,
}

impl BulkActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: BulkRequest) {
        debug!(
            "Queued {} for {} user(s)",
            request.action,
            request.logins.len()
        );
        self.pending.push(request);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn pending(&self) -> &[BulkRequest] {
        &self.pending
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, BulkRequest> {
        self.pending.drain(..)
    }
}

impl BulkActionHandler for BulkActionQueue {
    fn on_enable(&mut self, users: &Users) {
        self.push(BulkRequest::for_selected(BulkAction::Enable, users));
    }

    fn on_disable(&mut self, users: &Users) {
        self.push(BulkRequest::for_selected(BulkAction::Disable, users));
    }

    fn on_delete(&mut self, users: &Users) {
        self.push(BulkRequest::for_selected(BulkAction::Delete, users));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserItem;

    #[test]
    fn queue_records_selected_logins_only() {
        let mut users = Users::new(vec![
            UserItem::builder().login_name("alice").build(),
            UserItem::builder().login_name("bob").build(),
        ]);
        users.set_selected(Ustr::from("bob"), true);

        let mut queue = BulkActionQueue::new();
        queue.on_bulk_action(BulkAction::Disable, &users);

        assert_eq!(
            queue.pending(),
            &[BulkRequest::new(BulkAction::Disable, vec![Ustr::from("bob")])]
        );

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn outcome_messages() {
        let messages: Vec<String> = BulkAction::ALL
            .into_iter()
            .map(|action| BulkOutcome {
                action,
                affected: 2,
            })
            .map(|outcome| outcome.message())
            .collect();

        assert_eq!(
            messages,
            [
                "Users were enabled successfully!",
                "Users were disabled successfully!",
                "Users were deleted successfully!",
            ]
        );
    }
}
