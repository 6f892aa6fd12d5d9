//! Seed data for the admin panel.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{Error, RoleRef, Roles, UserItem, Users};

/// Users and roles loaded together from one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default)]
    pub users: Vec<UserItem>,
    #[serde(default)]
    pub roles: Roles,
}

impl Directory {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json(&json)?;
        info!(
            "Loaded {} user(s) and {} role(s) from {}",
            directory.users.len(),
            directory.roles.len(),
            path.display()
        );
        Ok(directory)
    }

    /// Small built-in directory used when nothing is configured.
    pub fn sample() -> Self {
        let role = |name: &str| Ustr::from(name);
        let users = vec![
            UserItem::builder()
                .login_name("admin")
                .display_name("Administrator")
                .email("admin@example.com")
                .is_admin(true)
                .roles(vec![role("admins")])
                .build(),
            UserItem::builder()
                .login_name("jdoe")
                .display_name("Jane Doe")
                .email("jane.doe@example.com")
                .roles(vec![role("developers")])
                .build(),
            UserItem::builder()
                .login_name("rroe")
                .display_name("Richard Roe")
                .email("richard.roe@example.com")
                .roles(vec![role("developers"), role("qa")])
                .build(),
            UserItem::builder()
                .login_name("ops-bot")
                .roles(vec![role("operators")])
                .build(),
            UserItem::builder()
                .login_name("former")
                .display_name("Former Employee")
                .enabled(false)
                .build(),
        ];
        let roles = [
            RoleRef::new("admins"),
            RoleRef::new("developers"),
            RoleRef::new("qa"),
            RoleRef::plugin("operators"),
        ]
        .into_iter()
        .collect();

        Self { users, roles }
    }

    pub fn into_parts(self) -> (Users, Roles) {
        (Users::new(self.users), self.roles)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::RoleKind;

    const JSON: &str = r#"{
        "users": [
            {"login_name": "alice", "email": "alice@example.com", "is_admin": true, "roles": ["ops"]},
            {"login_name": "bob", "enabled": false}
        ],
        "roles": [{"name": "ops"}, {"name": "ldap", "kind": "plugin"}]
    }"#;

    #[test]
    fn parses_users_and_roles() {
        let (users, roles) = Directory::from_json(JSON).unwrap().into_parts();

        assert_eq!(users.total_users_count(), 2);
        assert_eq!(users.enabled_users_count(), 1);
        let alice = users.get(Ustr::from("alice")).unwrap();
        assert!(alice.is_admin);
        assert!(!alice.checked);
        assert_eq!(alice.roles, [Ustr::from("ops")]);
        assert_eq!(roles.len(), 2);
        assert_eq!(roles.iter().last().map(|role| role.kind), Some(RoleKind::Plugin));
    }

    #[test]
    fn duplicate_logins_collapse_to_one_user() {
        let json = r#"{"users":[{"login_name":"alice"},{"login_name":"alice","enabled":false}]}"#;

        let (users, _) = Directory::from_json(json).unwrap().into_parts();

        assert_eq!(users.total_users_count(), 1);
        assert_eq!(users.enabled_users_count(), 1);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let directory = Directory::from_json("{}").unwrap();

        assert!(directory.users.is_empty());
        assert!(directory.roles.is_empty());
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = Directory::from_json("{\"users\": 3}").unwrap_err();

        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Invalid directory JSON"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(JSON.as_bytes()).unwrap();

        let directory = Directory::load(file.path()).unwrap();

        assert_eq!(directory.users.len(), 2);
    }

    #[test]
    fn load_reports_the_missing_path() {
        let err = Directory::load("/definitely/not/here.json").unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn sample_roles_cover_every_user_role() {
        let (users, roles) = Directory::sample().into_parts();

        for user in &users {
            for role in &user.roles {
                assert!(roles.contains(*role), "{role} missing from sample roles");
            }
        }
        assert_eq!(users.disabled_users_count(), 1);
    }
}
