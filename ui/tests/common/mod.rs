use roster_business::{Directory, RoleRef, UserItem};
use roster_ui::RosterApp;
use roster_ui::state::State;
use egui_kittest::Harness;

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, State> {
    #[allow(unused)]
    pub fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        init_logger();
        let harness = Harness::new_ui_state(app, State::test(directory()));

        Self { harness }
    }
}

impl<'a> TestCtx<'a, RosterApp> {
    #[allow(unused)]
    pub fn new_app() -> Self {
        init_logger();
        let app = RosterApp::new(State::test(directory()));
        let harness = Harness::new_eframe(|_| app);

        Self { harness }
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Ten users: seven enabled, three disabled, two of them administrators.
///
/// Everyone is in `staff` plus either `developers` or `qa`.
pub fn directory() -> Directory {
    let users = (0..10)
        .map(|i| {
            let role = if i % 2 == 0 { "developers" } else { "qa" };
            UserItem::builder()
                .login_name(format!("user{i}").as_str())
                .display_name(format!("User {i}"))
                .email(format!("user{i}@example.com"))
                .is_admin(i < 2)
                .enabled(i < 7)
                .roles(vec!["staff".into(), role.into()])
                .build()
        })
        .collect();

    Directory {
        users,
        roles: [
            RoleRef::new("developers"),
            RoleRef::new("qa"),
            RoleRef::plugin("ldap-admins"),
        ]
        .into_iter()
        .collect(),
    }
}
