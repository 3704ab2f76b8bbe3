//! `proplink reset` command.

use crate::config::LinkageConfig;
use crate::context::ServiceContext;
use crate::store::RosterStore;

/// Execute the `reset` command.
///
/// # Errors
///
/// Returns an error string if the saved form cannot be removed.
pub fn run(ctx: &ServiceContext, config: &LinkageConfig) -> Result<(), String> {
    RosterStore::new(ctx, &config.store_root)
        .clear_form()
        .map_err(|e| format!("Failed to clear form: {e}"))?;
    println!("Form cleared.");
    Ok(())
}
