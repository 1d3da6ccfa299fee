//! Derived identity and role vocabulary

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Who is logged in and what they may do. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub email: String,
    pub roles: BTreeSet<String>,
}

impl Identity {
    pub fn new<I, S>(email: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            email: email.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Check for a single role
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role.as_str())
    }

    /// Check whether any of `roles` is held
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.has_role(r))
    }

    /// Roles parsed into the known vocabulary
    pub fn known_roles(&self) -> Vec<Role> {
        self.roles.iter().map(|r| Role::from(r.as_str())).collect()
    }
}

/// Role strings issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Director,
    Inspector,
    /// Anything the backend sends that this client does not know about
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Director => "ROLE_DIRECTOR",
            Role::Inspector => "ROLE_INSPECTOR",
            Role::Other(s) => s,
        }
    }

    /// Human label for status output
    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Administrator",
            Role::Director => "Director",
            Role::Inspector => "Inspector",
            Role::Other(s) => s,
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "ROLE_ADMIN" => Role::Admin,
            "ROLE_DIRECTOR" => Role::Director,
            "ROLE_INSPECTOR" => Role::Inspector,
            other => Role::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_a_set() {
        let identity = Identity::new("a@b.com", ["ROLE_ADMIN", "ROLE_ADMIN", "ROLE_DIRECTOR"]);
        assert_eq!(identity.roles.len(), 2);
    }

    #[test]
    fn test_has_any_role() {
        let identity = Identity::new("i@school.org", ["ROLE_INSPECTOR"]);
        assert!(identity.has_role(&Role::Inspector));
        assert!(!identity.has_role(&Role::Admin));
        assert!(identity.has_any_role(&[Role::Admin, Role::Inspector]));
        assert!(!identity.has_any_role(&[Role::Admin, Role::Director]));
        assert!(!identity.has_any_role(&[]));
    }

    #[test]
    fn test_unknown_roles_are_kept() {
        let identity = Identity::new("x@y.z", ["ROLE_AUDITOR"]);
        assert_eq!(
            identity.known_roles(),
            vec![Role::Other("ROLE_AUDITOR".to_string())]
        );
        assert!(identity.has_role(&Role::Other("ROLE_AUDITOR".to_string())));
    }

    #[test]
    fn test_role_roundtrip_through_str() {
        for role in [Role::Admin, Role::Director, Role::Inspector] {
            assert_eq!(Role::from(role.as_str()), role);
        }
        assert_eq!(Role::Director.to_string(), "ROLE_DIRECTOR");
        assert_eq!(Role::Director.label(), "Director");
    }
}
