//! `proplink import` command.

use std::path::Path;

use crate::config::LinkageConfig;
use crate::context::ServiceContext;
use crate::store::RosterStore;

/// Execute the `import` command.
///
/// # Errors
///
/// Returns an error string if the source cannot be read or parsed, or the
/// store cannot be written.
pub fn run(ctx: &ServiceContext, config: &LinkageConfig, path: &Path) -> Result<(), String> {
    let store = RosterStore::new(ctx, &config.store_root);
    let roster = store.import_roster(path).map_err(|e| format!("Failed to import roster: {e}"))?;
    tracing::info!(source = %path.display(), properties = roster.properties.len(), "roster imported");
    println!(
        "Imported {} properties, {} agents, {} managers into {}",
        roster.properties.len(),
        roster.agents.len(),
        roster.managers.len(),
        store.root().display()
    );
    Ok(())
}
