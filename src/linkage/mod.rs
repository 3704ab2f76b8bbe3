//! Agent, manager and property linkage.
//!
//! Derives selector options from the raw lists, narrows the property
//! selector to what the selected agent or manager may be paired with, keeps
//! `agentCode` and `propertyCode` consistent across edits, and checks the
//! pair before submission. Everything here is pure; the only output that
//! touches caller state is the updater passed to `set_form`.

pub mod aria;
pub mod change;
pub mod engine;
pub mod filter;
pub mod index;
pub mod options;
pub mod pool;
pub mod validate;

#[cfg(test)]
mod fixtures;

pub use aria::{AriaAttributes, AriaProps, ARIA_PROPS};
pub use change::FormUpdater;
pub use engine::{LinkageEngine, LinkageInputs, LinkageView};
pub use filter::UnresolvedAgentPolicy;
pub use index::LinkageIndex;
pub use options::{AgentOption, PropertyOption};
pub use pool::{build_agent_pool, AgentPoolEntry, ManagerSeat};
pub use validate::{LinkageMismatch, LinkedSelection, Selection};
