//! Role-aware agent pool.
//!
//! The agent selector lists plain agents, and for managers and admins it
//! also lists managers who stand in for their whole team. Every entry is
//! classified once here so downstream code matches on the variant instead
//! of re-checking role strings.

use crate::model::{Agent, CurrentUser, Manager, Role};

/// A manager presented in agent-selector position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerSeat {
    /// Pool key; the manager's own code.
    pub user_code: String,
    /// Display name.
    pub name: String,
    /// Team key this entry is grouped under, if any.
    pub manager_code: Option<String>,
    /// Code of the owning admin, if any.
    pub admin_code: Option<String>,
}

impl ManagerSeat {
    /// Seat for a manager operating the form themselves.
    #[must_use]
    pub fn for_user(user: &CurrentUser) -> Self {
        let name = if user.name.is_empty() { "Manager".to_string() } else { user.name.clone() };
        Self { user_code: user.user_code.clone(), name, manager_code: None, admin_code: None }
    }

    /// Seat for a manager injected into an admin's pool.
    ///
    /// The manager's code doubles as its team key, so the seat is a member
    /// of its own team.
    #[must_use]
    pub fn from_manager(manager: &Manager) -> Self {
        Self {
            user_code: manager.manager_code.clone(),
            name: manager.name.clone(),
            manager_code: Some(manager.manager_code.clone()),
            admin_code: manager.admin_code.clone(),
        }
    }
}

/// One selectable entry in the agent dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentPoolEntry {
    /// A genuine agent record.
    Agent(Agent),
    /// A manager standing in for the agents under them.
    ManagerActingAsAgent(ManagerSeat),
}

impl AgentPoolEntry {
    /// Classifies a raw agent record. Records tagged with the `Manager`
    /// role become manager seats.
    #[must_use]
    pub fn from_agent(agent: &Agent) -> Self {
        if agent.role == Some(Role::Manager) {
            Self::ManagerActingAsAgent(ManagerSeat {
                user_code: agent.user_code.clone(),
                name: agent.name.clone(),
                manager_code: agent.manager_code.clone(),
                admin_code: agent.admin_code.clone(),
            })
        } else {
            Self::Agent(agent.clone())
        }
    }

    /// Pool key.
    #[must_use]
    pub fn user_code(&self) -> &str {
        match self {
            Self::Agent(agent) => &agent.user_code,
            Self::ManagerActingAsAgent(seat) => &seat.user_code,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Agent(agent) => &agent.name,
            Self::ManagerActingAsAgent(seat) => &seat.name,
        }
    }

    /// Team this entry belongs to. Empty codes count as no team.
    #[must_use]
    pub fn manager_code(&self) -> Option<&str> {
        let code = match self {
            Self::Agent(agent) => agent.manager_code.as_deref(),
            Self::ManagerActingAsAgent(seat) => seat.manager_code.as_deref(),
        };
        code.filter(|c| !c.is_empty())
    }

    /// Returns `true` for manager seats.
    #[must_use]
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::ManagerActingAsAgent(_))
    }

    /// Role reported to the selector.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Agent(agent) => agent.role,
            Self::ManagerActingAsAgent(_) => Some(Role::Manager),
        }
    }
}

/// Builds the agent pool for the acting user, managers first.
#[must_use]
pub fn build_agent_pool(
    agents: &[Agent],
    managers: &[Manager],
    user: &CurrentUser,
) -> Vec<AgentPoolEntry> {
    let leading: Vec<AgentPoolEntry> = match user.role {
        Role::Manager => vec![AgentPoolEntry::ManagerActingAsAgent(ManagerSeat::for_user(user))],
        role if role.sees_all_managers() => managers
            .iter()
            .map(|m| AgentPoolEntry::ManagerActingAsAgent(ManagerSeat::from_manager(m)))
            .collect(),
        _ => Vec::new(),
    };

    leading.into_iter().chain(agents.iter().map(AgentPoolEntry::from_agent)).collect()
}
