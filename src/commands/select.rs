//! `proplink select` command.

use crate::config::LinkageConfig;
use crate::context::ServiceContext;
use crate::model::{Form, FormEvent};
use crate::store::RosterStore;

/// Execute the `select` command.
///
/// Applies the change through the linkage rules and saves the resulting form.
///
/// # Errors
///
/// Returns an error string if the store cannot be read or written.
pub fn run(ctx: &ServiceContext, config: &LinkageConfig, field: &str, value: &str) -> Result<(), String> {
    let store = RosterStore::new(ctx, &config.store_root);
    let roster = super::load_roster(&store)?;
    let prev = store.load_form().map_err(|e| format!("Failed to load form: {e}"))?;
    let engine = roster.engine(config.unresolved_agent_policy);

    let mut next = prev.clone();
    engine.handle_linked_change(FormEvent::new(wire_name(field), value), |update| {
        next = update(&prev);
    });

    store.save_form(&next).map_err(|e| format!("Failed to save form: {e}"))?;
    tracing::info!(field, value, agent = %next.agent_code, property = %next.property_code, "selection updated");
    println!("{}", describe(&next));
    Ok(())
}

/// Maps the short field names accepted on the command line to form keys.
fn wire_name(field: &str) -> &str {
    match field {
        "agent" | "manager" => "agentCode",
        "property" => "propertyCode",
        other => other,
    }
}

fn describe(form: &Form) -> String {
    format!("agentCode: {}\npropertyCode: {}", or_none(&form.agent_code), or_none(&form.property_code))
}

fn or_none(code: &str) -> &str {
    if code.is_empty() {
        "(none)"
    } else {
        code
    }
}
