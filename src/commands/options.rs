//! `proplink options` command.

use std::fmt::Write;

use crate::config::LinkageConfig;
use crate::context::ServiceContext;
use crate::linkage::LinkageView;
use crate::model::Form;
use crate::store::RosterStore;

/// Execute the `options` command.
///
/// `agent` overrides the working form's selection for this view only; the
/// saved form is left untouched.
///
/// # Errors
///
/// Returns an error string if the roster or the form cannot be loaded.
pub fn run(
    ctx: &ServiceContext,
    config: &LinkageConfig,
    agent: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let store = RosterStore::new(ctx, &config.store_root);
    let roster = super::load_roster(&store)?;
    let mut form = store.load_form().map_err(|e| format!("Failed to load form: {e}"))?;
    if let Some(agent) = agent {
        form.agent_code = agent.to_string();
    }

    let view = roster.engine(config.unresolved_agent_policy).view(&form);
    let output = if json {
        serde_json::to_string_pretty(&view).map_err(|e| format!("Failed to encode view: {e}"))?
    } else {
        render(&view, &form)
    };
    println!("{output}");
    Ok(())
}

fn render(view: &LinkageView, form: &Form) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Agents:");
    for option in &view.agent_options {
        let marker = if option.value == form.agent_code { '*' } else { ' ' };
        let _ = writeln!(out, " {marker} {}", option.label);
    }

    if form.agent_code.is_empty() {
        let _ = writeln!(out, "\nProperties:");
    } else {
        let _ = writeln!(out, "\nProperties for {}:", form.agent_code);
    }
    for option in &view.property_options {
        let marker = if option.value == form.property_code { '*' } else { ' ' };
        let _ = writeln!(out, " {marker} {}", option.label);
    }
    if view.property_dropdown_disabled {
        let _ = writeln!(out, "   (no property available for the selected agent)");
    }
    if view.loading.any() {
        let _ = writeln!(out, "\nNote: some lists were still loading when the roster was captured.");
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;

    fn view_for(agent_code: &str) -> (LinkageView, Form) {
        let form = Form::with_selection(agent_code, "");
        let view = testing::roster().engine(Default::default()).view(&form);
        (view, form)
    }

    #[test]
    fn renders_all_properties_without_selection() {
        let (view, form) = view_for("");
        let text = render(&view, &form);

        assert!(text.contains("Agents:\n   MNG-1 - Mia (Manager)"));
        assert!(text.contains("\nProperties:\n"));
        assert!(text.contains("PROP-3 - Mill Court (Agent: Cy)"));
    }

    #[test]
    fn marks_selected_agent_and_narrows_properties() {
        let (view, form) = view_for("MNG-1");
        let text = render(&view, &form);

        assert!(text.contains(" * MNG-1 - Mia (Manager)"));
        assert!(text.contains("Properties for MNG-1:"));
        assert!(!text.contains("PROP-3"));
    }

    #[test]
    fn notes_empty_selection() {
        let mut roster = testing::roster();
        roster.agents.push(crate::model::Agent::new("AGT-9", "Ivy"));
        let form = Form::with_selection("AGT-9", "");
        let text = render(&roster.engine(Default::default()).view(&form), &form);
        assert!(text.contains("no property available"));
    }

    #[test]
    fn run_reads_seeded_store() {
        let (ctx, config) = testing::seeded("options_run");
        let result = run(&ctx, &config, Some("AGT-1"), true);
        testing::cleanup(&config);
        assert!(result.is_ok());
    }

    #[test]
    fn run_fails_without_roster() {
        let ctx = ServiceContext::live();
        let config = LinkageConfig {
            store_root: std::env::temp_dir().join("proplink_cmd_options_missing"),
            ..LinkageConfig::default()
        };
        let err = run(&ctx, &config, None, false).unwrap_err();
        assert!(err.contains("no roster found"));
    }
}
