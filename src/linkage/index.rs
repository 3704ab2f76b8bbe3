//! Lookup tables derived from the raw lists.

use std::collections::{HashMap, HashSet};

use crate::model::Property;

use super::pool::AgentPoolEntry;

/// Keyed views over properties and the agent pool.
///
/// Rebuilt from scratch whenever the source lists or the acting role
/// change. Entries with an empty key are left out of every table, and
/// duplicate keys resolve to the last entry.
#[derive(Debug, Clone, Default)]
pub struct LinkageIndex {
    properties: HashMap<String, Property>,
    agents: HashMap<String, AgentPoolEntry>,
    teams: HashMap<String, HashSet<String>>,
    property_counts: HashMap<String, usize>,
}

impl LinkageIndex {
    /// Indexes properties and the agent pool.
    #[must_use]
    pub fn build(properties: &[Property], pool: &[AgentPoolEntry]) -> Self {
        let mut index = Self::default();

        for property in properties {
            *index.property_counts.entry(property.agent_code.clone()).or_insert(0) += 1;
            if property.property_code.is_empty() {
                continue;
            }
            if index.properties.insert(property.property_code.clone(), property.clone()).is_some() {
                tracing::warn!(code = %property.property_code, "duplicate property code");
            }
        }

        for entry in pool {
            let code = entry.user_code();
            if code.is_empty() {
                continue;
            }
            if let Some(manager_code) = entry.manager_code() {
                index.teams.entry(manager_code.to_string()).or_default().insert(code.to_string());
            }
            if index.agents.insert(code.to_string(), entry.clone()).is_some() {
                tracing::warn!(code, "duplicate agent pool code");
            }
        }

        tracing::debug!(
            properties = index.properties.len(),
            agents = index.agents.len(),
            teams = index.teams.len(),
            "linkage index built"
        );
        index
    }

    /// Property by code.
    #[must_use]
    pub fn property(&self, code: &str) -> Option<&Property> {
        self.properties.get(code)
    }

    /// Pool entry by code.
    #[must_use]
    pub fn agent(&self, code: &str) -> Option<&AgentPoolEntry> {
        self.agents.get(code)
    }

    /// Codes of the pool entries grouped under a manager.
    #[must_use]
    pub fn team(&self, manager_code: &str) -> Option<&HashSet<String>> {
        self.teams.get(manager_code)
    }

    /// Number of properties owned by an agent code.
    #[must_use]
    pub fn property_count(&self, agent_code: &str) -> usize {
        self.property_counts.get(agent_code).copied().unwrap_or(0)
    }

    /// Whether `property` may be paired with `selected`, found under `selected_code`.
    ///
    /// A manager covers every property owned by a member of their team; an
    /// agent covers only their own.
    #[must_use]
    pub fn covers(&self, selected_code: &str, selected: &AgentPoolEntry, property: &Property) -> bool {
        if selected.is_manager() {
            self.team(selected_code).is_some_and(|team| team.contains(&property.agent_code))
        } else {
            property.agent_code == selected_code
        }
    }
}
