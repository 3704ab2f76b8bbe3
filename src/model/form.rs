//! Caller-owned form state and the events that edit it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Form state for deal, estimate and visit screens.
///
/// Only `agentCode` and `propertyCode` are linked. Every other field is
/// carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    /// Selected agent or manager code; empty when nothing is selected.
    #[serde(default)]
    pub agent_code: String,
    /// Selected property code; empty when nothing is selected.
    #[serde(default)]
    pub property_code: String,
    /// Remaining form fields, keyed by their wire name.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Form {
    /// Creates a form with the two linked fields set.
    #[must_use]
    pub fn with_selection(agent_code: &str, property_code: &str) -> Self {
        Self {
            agent_code: agent_code.to_string(),
            property_code: property_code.to_string(),
            extra: BTreeMap::new(),
        }
    }

    /// Writes a single field without applying any linkage rule.
    pub fn set_field(&mut self, field: &FormField, value: &str) {
        match field {
            FormField::AgentCode => self.agent_code = value.to_string(),
            FormField::PropertyCode => self.property_code = value.to_string(),
            FormField::Other(name) => {
                self.extra.insert(name.clone(), Value::String(value.to_string()));
            }
        }
    }
}

/// Field addressed by a change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// The `agentCode` field.
    AgentCode,
    /// The `propertyCode` field.
    PropertyCode,
    /// Any unlinked field.
    Other(String),
}

impl FormField {
    /// Classifies a wire field name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "agentCode" => Self::AgentCode,
            "propertyCode" => Self::PropertyCode,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A change event raised by a form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEvent {
    /// Wire name of the edited field.
    pub name: String,
    /// New value of the field.
    pub value: String,
}

impl FormEvent {
    /// Creates an event for the named field.
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self { name: name.to_string(), value: value.to_string() }
    }

    /// The field this event targets.
    #[must_use]
    pub fn field(&self) -> FormField {
        FormField::from_name(&self.name)
    }
}

/// Fetch state of the three source lists. Not used by any derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingFlags {
    /// Agents are still loading.
    #[serde(default)]
    pub all_agents_loading: bool,
    /// Properties are still loading.
    #[serde(default)]
    pub all_properties_loading: bool,
    /// Managers are still loading.
    #[serde(default)]
    pub all_managers_loading: bool,
}

impl LoadingFlags {
    /// Returns `true` while any list is still being fetched.
    #[must_use]
    pub fn any(&self) -> bool {
        self.all_agents_loading || self.all_properties_loading || self.all_managers_loading
    }
}
