//! `proplink show` command.

use std::fmt::Write;

use crate::config::LinkageConfig;
use crate::context::ServiceContext;
use crate::store::{Roster, RosterStore, SavedForm};

/// Execute the `show` command.
///
/// # Errors
///
/// Returns an error string if the roster or the form cannot be loaded.
pub fn run(ctx: &ServiceContext, config: &LinkageConfig) -> Result<(), String> {
    let store = RosterStore::new(ctx, &config.store_root);
    let roster = super::load_roster(&store)?;
    let saved = store.load_saved_form().map_err(|e| format!("Failed to load form: {e}"))?;
    println!("{}", render(&roster, saved.as_ref()));
    Ok(())
}

fn render(roster: &Roster, saved: Option<&SavedForm>) -> String {
    let mut out = String::new();
    let user = &roster.user;
    let _ = writeln!(out, "User: {} - {} ({})", user.user_code, user.name, user.role.as_str());
    if let Some(captured_at) = roster.captured_at {
        let _ = writeln!(out, "Captured: {}", captured_at.to_rfc3339());
    }
    let _ = writeln!(out, "Properties: {}", roster.properties.len());
    let _ = writeln!(out, "Agents: {}", roster.agents.len());
    let _ = writeln!(out, "Managers: {}", roster.managers.len());

    match saved {
        None => {
            let _ = writeln!(out, "\nNo form saved.");
        }
        Some(saved) => {
            let _ = writeln!(out, "\nForm (saved {}):", saved.saved_at.to_rfc3339());
            let _ = writeln!(out, "  agentCode: {}", saved.form.agent_code);
            let _ = writeln!(out, "  propertyCode: {}", saved.form.property_code);
            for (key, value) in &saved.form.extra {
                let _ = writeln!(out, "  {key}: {value}");
            }
        }
    }

    out.trim_end().to_string()
}
