//! Selector options derived from the pool and the property list.

use serde::{Deserialize, Serialize};

use crate::model::{Property, Role};

use super::index::LinkageIndex;
use super::pool::AgentPoolEntry;

/// One entry of the agent selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentOption {
    /// Pool key submitted with the form.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Properties owned under this code.
    pub num_properties: usize,
    /// Whether the entry stands in for a manager's team.
    pub is_manager: bool,
    /// Role carried by the entry.
    pub role: Option<Role>,
}

/// One entry of the property selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOption {
    /// Property code submitted with the form.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Name of the owning agent, or empty when the owner is not in the pool.
    pub agent_name: String,
}

/// Agent selector options, in pool order.
#[must_use]
pub fn agent_options(pool: &[AgentPoolEntry], index: &LinkageIndex) -> Vec<AgentOption> {
    pool.iter()
        .map(|entry| {
            let num_properties = index.property_count(entry.user_code());
            AgentOption {
                value: entry.user_code().to_string(),
                label: agent_label(entry, num_properties),
                num_properties,
                is_manager: entry.is_manager(),
                role: entry.role(),
            }
        })
        .collect()
}

/// Unfiltered property selector options, in list order.
#[must_use]
pub fn property_options(properties: &[Property], index: &LinkageIndex) -> Vec<PropertyOption> {
    properties
        .iter()
        .map(|property| {
            let owner = index.agent(&property.agent_code);
            let mut label = format!("{} - {}", property.property_code, property.property_name);
            if let Some(owner) = owner {
                label.push_str(&format!(" (Agent: {})", owner.name()));
            }
            PropertyOption {
                value: property.property_code.clone(),
                label,
                agent_name: owner.map(|o| o.name().to_string()).unwrap_or_default(),
            }
        })
        .collect()
}

fn agent_label(entry: &AgentPoolEntry, num_properties: usize) -> String {
    match entry {
        AgentPoolEntry::ManagerActingAsAgent(seat) => {
            format!("{} - {} (Manager)", seat.user_code, seat.name)
        }
        AgentPoolEntry::Agent(agent) => {
            let noun = if num_properties == 1 { "property" } else { "properties" };
            format!("{} - {} ({num_properties} {noun})", agent.user_code, agent.name)
        }
    }
}
