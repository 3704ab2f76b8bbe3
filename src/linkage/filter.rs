//! Property filtering by the selected agent or manager.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::index::LinkageIndex;
use super::options::PropertyOption;

/// What the property selector offers when the selected code is not in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedAgentPolicy {
    /// Offer every property.
    #[default]
    ShowAll,
    /// Offer nothing; the selector is disabled.
    ShowNone,
}

impl FromStr for UnresolvedAgentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "show_all" | "all" => Ok(Self::ShowAll),
            "show_none" | "none" => Ok(Self::ShowNone),
            other => Err(format!("unknown unresolved-agent policy '{other}'")),
        }
    }
}

/// Narrows property options to what the selected code may be paired with.
///
/// An empty `agent_code` offers everything. Options whose code is not in
/// the index never survive a filter.
#[must_use]
pub fn filter_properties(
    options: &[PropertyOption],
    index: &LinkageIndex,
    agent_code: &str,
    policy: UnresolvedAgentPolicy,
) -> Vec<PropertyOption> {
    if agent_code.is_empty() {
        return options.to_vec();
    }
    let Some(selected) = index.agent(agent_code) else {
        tracing::debug!(agent_code, ?policy, "selected agent not in pool");
        return match policy {
            UnresolvedAgentPolicy::ShowAll => options.to_vec(),
            UnresolvedAgentPolicy::ShowNone => Vec::new(),
        };
    };

    options
        .iter()
        .filter(|option| {
            index
                .property(&option.value)
                .is_some_and(|property| index.covers(agent_code, selected, property))
        })
        .cloned()
        .collect()
}

/// The property selector is locked once a selection leaves nothing to pick.
#[must_use]
pub fn property_dropdown_disabled(agent_code: &str, filtered: &[PropertyOption]) -> bool {
    !agent_code.is_empty() && filtered.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkage::fixtures;

    fn codes(options: &[PropertyOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    fn filtered(agent_code: &str, policy: UnresolvedAgentPolicy) -> Vec<PropertyOption> {
        let engine = fixtures::admin_engine();
        filter_properties(engine.all_property_options(), engine.index(), agent_code, policy)
    }

    #[test]
    fn empty_selection_offers_everything() {
        let result = filtered("", UnresolvedAgentPolicy::ShowAll);
        assert_eq!(codes(&result), vec!["PROP-1", "PROP-2", "PROP-3", "PROP-4"]);
    }

    #[test]
    fn agent_sees_only_own_properties() {
        let result = filtered("AGT-2", UnresolvedAgentPolicy::ShowAll);
        assert_eq!(codes(&result), vec!["PROP-2", "PROP-4"]);
    }

    #[test]
    fn manager_sees_team_properties() {
        let result = filtered("MNG-1", UnresolvedAgentPolicy::ShowAll);
        assert_eq!(codes(&result), vec!["PROP-1", "PROP-2", "PROP-4"]);
    }

    #[test]
    fn manager_with_idle_team_sees_nothing() {
        assert!(filtered("MNG-2", UnresolvedAgentPolicy::ShowAll).is_empty());
    }

    #[test]
    fn unknown_agent_fails_open_by_default() {
        let result = filtered("AGT-404", UnresolvedAgentPolicy::default());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn unknown_agent_can_fail_closed() {
        assert!(filtered("AGT-404", UnresolvedAgentPolicy::ShowNone).is_empty());
    }

    #[test]
    fn disabled_only_when_selection_leaves_nothing() {
        let some = filtered("AGT-1", UnresolvedAgentPolicy::ShowAll);
        assert!(!property_dropdown_disabled("AGT-1", &some));
        assert!(property_dropdown_disabled("AGT-4", &[]));
        assert!(!property_dropdown_disabled("", &[]));
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("show_all".parse::<UnresolvedAgentPolicy>(), Ok(UnresolvedAgentPolicy::ShowAll));
        assert_eq!(" NONE ".parse::<UnresolvedAgentPolicy>(), Ok(UnresolvedAgentPolicy::ShowNone));
        assert!("sometimes".parse::<UnresolvedAgentPolicy>().is_err());
    }
}
