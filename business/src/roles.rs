use std::any::Any;

use roster_states::State;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Where a role is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    #[default]
    Gocd,
    Plugin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub name: Ustr,
    #[serde(default)]
    pub kind: RoleKind,
}

impl RoleRef {
    pub fn new(name: impl Into<Ustr>) -> Self {
        Self {
            name: name.into(),
            kind: RoleKind::Gocd,
        }
    }

    pub fn plugin(name: impl Into<Ustr>) -> Self {
        Self {
            name: name.into(),
            kind: RoleKind::Plugin,
        }
    }

    pub fn name(&self) -> Ustr {
        self.name
    }
}

/// Ordered role list; names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RoleRef>", into = "Vec<RoleRef>")]
pub struct Roles {
    items: Vec<RoleRef>,
}

impl State for Roles {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl FromIterator<RoleRef> for Roles {
    fn from_iter<I: IntoIterator<Item = RoleRef>>(iter: I) -> Self {
        let mut roles = Self::default();
        for role in iter {
            roles.push(role);
        }
        roles
    }
}

impl From<Vec<RoleRef>> for Roles {
    fn from(items: Vec<RoleRef>) -> Self {
        items.into_iter().collect()
    }
}

impl From<Roles> for Vec<RoleRef> {
    fn from(roles: Roles) -> Self {
        roles.items
    }
}

impl<'a> IntoIterator for &'a Roles {
    type Item = &'a RoleRef;
    type IntoIter = std::slice::Iter<'a, RoleRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Roles {
    pub fn iter(&self) -> std::slice::Iter<'_, RoleRef> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = Ustr> + '_ {
        self.items.iter().map(RoleRef::name)
    }

    pub fn contains(&self, name: Ustr) -> bool {
        self.items.iter().any(|role| role.name == name)
    }

    /// Returns `false` if a role with the same name already exists.
    pub fn push(&mut self, role: RoleRef) -> bool {
        if self.contains(role.name) {
            return false;
        }
        self.items.push(role);
        true
    }

    pub fn remove(&mut self, name: Ustr) -> Option<RoleRef> {
        let index = self.items.iter().position(|role| role.name == name)?;
        Some(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut roles: Roles = [RoleRef::new("admins"), RoleRef::plugin("ldap-devs")]
            .into_iter()
            .collect();

        assert!(!roles.push(RoleRef::plugin("admins")));
        assert_eq!(roles.len(), 2);
        assert_eq!(
            roles.names().collect::<Vec<_>>(),
            [Ustr::from("admins"), Ustr::from("ldap-devs")]
        );
    }

    #[test]
    fn remove_by_name() {
        let mut roles: Roles = [RoleRef::new("admins"), RoleRef::new("qa")]
            .into_iter()
            .collect();

        let removed = roles.remove(Ustr::from("qa"));

        assert_eq!(removed, Some(RoleRef::new("qa")));
        assert!(!roles.contains(Ustr::from("qa")));
        assert_eq!(roles.remove(Ustr::from("qa")), None);
    }

    #[test]
    fn kind_defaults_to_gocd_in_json() {
        let roles: Roles =
            serde_json::from_str(r#"[{"name":"ops"},{"name":"ldap","kind":"plugin"}]"#).unwrap();

        let kinds: Vec<RoleKind> = roles.iter().map(|role| role.kind).collect();
        assert_eq!(kinds, [RoleKind::Gocd, RoleKind::Plugin]);
    }

    #[test]
    fn duplicate_names_in_json_are_dropped() {
        let roles: Roles =
            serde_json::from_str(r#"[{"name":"ops"},{"name":"ops","kind":"plugin"}]"#).unwrap();

        assert_eq!(roles.len(), 1);
        assert_eq!(roles.iter().next().map(|role| role.kind), Some(RoleKind::Gocd));
    }
}
