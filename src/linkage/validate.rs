//! Submit-time agent/property compatibility check.

use thiserror::Error;

use crate::model::Form;

use super::index::LinkageIndex;

/// Why an agent/property pair cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkageMismatch {
    /// The property or the agent is not known.
    #[error("Selected property does not belong to the selected agent.")]
    UnknownSelection,
    /// The selected manager has no team member owning the property.
    #[error("Selected property does not belong to any agent under the selected manager.")]
    OutsideManagerTeam,
    /// The selected agent does not own the property.
    #[error("Selected property does not belong to the selected agent.")]
    NotOwnedByAgent,
}

/// Anything carrying the two linked codes.
pub trait LinkedSelection {
    /// Selected agent or manager code.
    fn agent_code(&self) -> &str;
    /// Selected property code.
    fn property_code(&self) -> &str;
}

impl LinkedSelection for Form {
    fn agent_code(&self) -> &str {
        &self.agent_code
    }

    fn property_code(&self) -> &str {
        &self.property_code
    }
}

/// A borrowed agent/property pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Selected agent or manager code.
    pub agent_code: &'a str,
    /// Selected property code.
    pub property_code: &'a str,
}

impl LinkedSelection for Selection<'_> {
    fn agent_code(&self) -> &str {
        self.agent_code
    }

    fn property_code(&self) -> &str {
        self.property_code
    }
}

/// Checks that the selected property may be paired with the selected agent.
///
/// A selection missing either code has nothing to check yet and passes.
///
/// # Errors
///
/// Returns the [`LinkageMismatch`] describing why the pair is rejected.
pub fn validate_selection<S>(index: &LinkageIndex, selection: &S) -> Result<(), LinkageMismatch>
where
    S: LinkedSelection + ?Sized,
{
    let (agent_code, property_code) = (selection.agent_code(), selection.property_code());
    if agent_code.is_empty() || property_code.is_empty() {
        return Ok(());
    }

    let (Some(property), Some(selected)) = (index.property(property_code), index.agent(agent_code))
    else {
        return Err(LinkageMismatch::UnknownSelection);
    };

    if index.covers(agent_code, selected, property) {
        Ok(())
    } else if selected.is_manager() {
        Err(LinkageMismatch::OutsideManagerTeam)
    } else {
        Err(LinkageMismatch::NotOwnedByAgent)
    }
}
