//! Acting user and role classification.

use serde::{Deserialize, Serialize};

/// Back-office role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// Sales agent.
    Agent,
    /// Supervises a team of agents.
    Manager,
    /// Sees every manager and agent.
    Admin,
    /// Same visibility as `Admin`.
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    /// Any role string this crate does not know about, or no role at all.
    ///
    /// The original string is not kept; it serializes back as `"Unknown"`.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
            Self::SuperAdmin => "Super Admin",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns `true` for roles with visibility over all managers.
    #[must_use]
    pub fn sees_all_managers(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

/// The user operating the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Role of the acting user; a missing role reads as [`Role::Unknown`].
    #[serde(default)]
    pub role: Role,
    /// The user's own code.
    #[serde(default)]
    pub user_code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl CurrentUser {
    /// Creates a user with the given role.
    #[must_use]
    pub fn new(role: Role, user_code: &str, name: &str) -> Self {
        Self { role, user_code: user_code.to_string(), name: name.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_uses_spaced_wire_name() {
        let role: Role = serde_json::from_str("\"Super Admin\"").unwrap();
        assert_eq!(role, Role::SuperAdmin);
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"Super Admin\"");
    }

    #[test]
    fn unknown_role_strings_do_not_fail() {
        let role: Role = serde_json::from_str("\"Accountant\"").unwrap();
        assert_eq!(role, Role::Unknown);
        assert!(!role.sees_all_managers());
    }

    #[test]
    fn user_without_role_reads_as_unknown() {
        let user: CurrentUser = serde_json::from_str(r#"{"user_code":"USR-1","name":"Kim"}"#).unwrap();
        assert_eq!(user.role, Role::Unknown);
        assert_eq!(user.user_code, "USR-1");
    }

    #[test]
    fn unknown_role_is_written_back_as_unknown() {
        let role: Role = serde_json::from_str("\"Accountant\"").unwrap();
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"Unknown\"");
    }

    #[test]
    fn admins_see_all_managers() {
        assert!(Role::Admin.sees_all_managers());
        assert!(Role::SuperAdmin.sees_all_managers());
        assert!(!Role::Manager.sees_all_managers());
        assert!(!Role::Agent.sees_all_managers());
    }
}
