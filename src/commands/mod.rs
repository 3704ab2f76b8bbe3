//! Command dispatch and handlers.

pub mod import;
pub mod options;
pub mod reset;
pub mod select;
pub mod show;
pub mod validate;

use crate::cli::Command;
use crate::config::LinkageConfig;
use crate::context::ServiceContext;
use crate::store::{Roster, RosterStore};

/// Dispatch a parsed command to its handler using live adapters.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, config: &LinkageConfig) -> Result<(), String> {
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx, config)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &LinkageConfig,
) -> Result<(), String> {
    match command {
        Command::Options { agent, json } => options::run(ctx, config, agent.as_deref(), *json),
        Command::Select { field, value } => select::run(ctx, config, field, value),
        Command::Validate { agent, property } => {
            validate::run(ctx, config, agent.as_deref(), property.as_deref())
        }
        Command::Import { path } => import::run(ctx, config, path),
        Command::Show => show::run(ctx, config),
        Command::Reset => reset::run(ctx, config),
    }
}

/// Loads the roster and fails with a readable message when it is missing.
fn load_roster(store: &RosterStore<'_>) -> Result<Roster, String> {
    store.load_roster().map_err(|e| format!("Failed to load roster: {e}"))
}
