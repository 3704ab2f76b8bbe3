//! `proplink validate` command.

use crate::config::LinkageConfig;
use crate::context::ServiceContext;
use crate::linkage::Selection;
use crate::store::RosterStore;

/// Execute the `validate` command.
///
/// Checks the given agent/property pair, or the working form when no pair
/// is given.
///
/// # Errors
///
/// Returns the mismatch message when the pair is rejected, or an error
/// string if the store cannot be read.
pub fn run(
    ctx: &ServiceContext,
    config: &LinkageConfig,
    agent: Option<&str>,
    property: Option<&str>,
) -> Result<(), String> {
    let store = RosterStore::new(ctx, &config.store_root);
    let roster = super::load_roster(&store)?;
    let engine = roster.engine(config.unresolved_agent_policy);

    let result = if let (Some(agent_code), Some(property_code)) = (agent, property) {
        engine.validate_agent_property_match(&Selection { agent_code, property_code })
    } else {
        let form = store.load_form().map_err(|e| format!("Failed to load form: {e}"))?;
        engine.prepare_submission(&form).map(|_| ())
    };

    result.map_err(|e| e.to_string())?;
    println!("Selection is valid.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::model::Form;

    #[test]
    fn explicit_pair_is_checked() {
        let (ctx, config) = testing::seeded("validate_pair");
        let ok = run(&ctx, &config, Some("MNG-1"), Some("PROP-2"));
        let err = run(&ctx, &config, Some("MNG-1"), Some("PROP-3"));
        testing::cleanup(&config);

        assert!(ok.is_ok());
        assert_eq!(
            err.unwrap_err(),
            "Selected property does not belong to any agent under the selected manager."
        );
    }

    #[test]
    fn working_form_is_checked() {
        let (ctx, config) = testing::seeded("validate_form");
        let store = RosterStore::new(&ctx, &config.store_root);

        let empty = run(&ctx, &config, None, None);
        store.save_form(&Form::with_selection("AGT-2", "PROP-1")).unwrap();
        let mismatch = run(&ctx, &config, None, None);
        testing::cleanup(&config);

        assert!(empty.is_ok());
        assert_eq!(mismatch.unwrap_err(), "Selected property does not belong to the selected agent.");
    }
}
