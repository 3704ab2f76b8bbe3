//! Listed property record.

use serde::{Deserialize, Serialize};

/// A property listed by the brokerage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Property {
    /// Unique property code (e.g., "PROP-12").
    #[serde(default)]
    pub property_code: String,
    /// Display name of the property.
    #[serde(default)]
    pub property_name: String,
    /// Code of the agent who owns the listing.
    #[serde(default)]
    pub agent_code: String,
}

impl Property {
    /// Convenience constructor used by fixtures and callers building lists by hand.
    #[must_use]
    pub fn new(code: &str, name: &str, agent_code: &str) -> Self {
        Self {
            property_code: code.to_string(),
            property_name: name.to_string(),
            agent_code: agent_code.to_string(),
        }
    }
}
