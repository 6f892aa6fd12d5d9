use roster_business::{BulkActionQueue, Directory, RosterConfig, UserFilters, Users};
use roster_states::StateCtx;

use crate::widgets::{FlashMessage, UsersActionsWidget};

/// The main application state.
pub struct State {
    /// Users, roles, filters and configuration.
    pub ctx: StateCtx,
    /// Action bar, owns the filter panel visibility.
    pub actions: UsersActionsWidget,
    /// Bulk requests raised while drawing, applied after the frame.
    pub queue: BulkActionQueue,
    /// Outcome of the last bulk request.
    pub flash: Option<FlashMessage>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Directory::sample(), RosterConfig::default())
    }
}

impl State {
    pub fn new(directory: Directory, config: RosterConfig) -> Self {
        let (users, roles) = directory.into_parts();
        let actions = UsersActionsWidget::with_filters_open(config.filters_open());

        let mut ctx = StateCtx::new();
        ctx.add_state(users);
        ctx.add_state(roles);
        ctx.add_state(UserFilters::new());
        ctx.add_state(config);

        Self {
            ctx,
            actions,
            queue: BulkActionQueue::new(),
            flash: None,
        }
    }

    /// State over the given directory with default configuration.
    pub fn test(directory: Directory) -> Self {
        Self::new(directory, RosterConfig::default())
    }

    pub fn users(&self) -> &Users {
        self.ctx.state::<Users>()
    }

    pub fn user_filters(&self) -> &UserFilters {
        self.ctx.state::<UserFilters>()
    }
}
