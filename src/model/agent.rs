//! Agent and manager records as supplied by the caller.

use serde::{Deserialize, Serialize};

use super::user::Role;

/// A sales agent as returned by the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agent {
    /// Unique user code (e.g., "AGT-3").
    #[serde(default)]
    pub user_code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Code of the supervising manager, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_code: Option<String>,
    /// Code of the owning admin, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_code: Option<String>,
    /// Role tag carried by the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Agent {
    /// Creates an agent with no manager, admin or role.
    #[must_use]
    pub fn new(user_code: &str, name: &str) -> Self {
        Self { user_code: user_code.to_string(), name: name.to_string(), ..Self::default() }
    }

    /// Sets the supervising manager.
    #[must_use]
    pub fn managed_by(mut self, manager_code: &str) -> Self {
        self.manager_code = Some(manager_code.to_string());
        self
    }
}

/// A manager as returned by the managers endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manager {
    /// Unique manager code; used as the pool key when a manager stands in for an agent.
    #[serde(default)]
    pub manager_code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Code of the owning admin, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_code: Option<String>,
}

impl Manager {
    /// Creates a manager without an admin.
    #[must_use]
    pub fn new(manager_code: &str, name: &str) -> Self {
        Self { manager_code: manager_code.to_string(), name: name.to_string(), admin_code: None }
    }
}
