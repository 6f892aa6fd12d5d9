//! Users administration page.
//!
//! Draws the outcome banner, the action bar and the users table. Bulk
//! requests and selection changes raised while drawing are applied once the
//! frame no longer borrows the users.

use egui::{Response, Ui};
use log::warn;
use roster_business::{Roles, UserFilters, Users};

use crate::state::State;
use crate::widgets::{FlashMessage, UsersActionsAttrs, flash, users_table};

pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    state
        .ctx
        .state::<UserFilters>()
        .reconcile_roles(state.ctx.state::<Roles>());

    let inner = ui.vertical(|ui| {
        if let Some(message) = &state.flash {
            let (_, dismissed) = flash(ui, message);
            if dismissed {
                state.flash = None;
            }
        }

        let users = state.ctx.state::<Users>();
        let user_filters = state.ctx.state::<UserFilters>();
        state.actions.show(
            ui,
            UsersActionsAttrs {
                users,
                roles: state.ctx.state::<Roles>(),
                user_filters,
                handler: &mut state.queue,
            },
        );
        ui.separator();
        users_table(ui, users, user_filters)
    });

    if let Some(change) = inner.inner {
        change.apply(state.ctx.state_mut::<Users>());
    }
    apply_pending(state);

    inner.response
}

fn apply_pending(state: &mut State) {
    let users = state.ctx.state_mut::<Users>();
    for request in state.queue.drain() {
        state.flash = Some(match users.apply(&request) {
            Ok(outcome) => FlashMessage::Success(outcome.message()),
            Err(err) => {
                warn!("{} failed: {err}", request.action);
                FlashMessage::Error(err.to_string())
            }
        });
    }
}
