//! Linked edits of the `agentCode` and `propertyCode` fields.
//!
//! Selecting an agent clears the property. Selecting a property moves the
//! agent to the property's owner, unless the selected manager's team
//! already covers it.

use crate::model::{Form, FormEvent, FormField};

use super::index::LinkageIndex;

/// Updater handed to the host's `set_form`; evaluated against the host's
/// previous form.
pub type FormUpdater<'a> = Box<dyn Fn(&Form) -> Form + 'a>;

/// Applies one change event to `prev` and returns the next form.
#[must_use]
pub fn reduce(index: &LinkageIndex, prev: &Form, event: &FormEvent) -> Form {
    let mut next = prev.clone();
    match event.field() {
        FormField::AgentCode => {
            next.agent_code.clone_from(&event.value);
            next.property_code.clear();
        }
        FormField::PropertyCode => {
            let property = index.property(&event.value);
            let manager_keeps_selection = property.is_some_and(|property| {
                index.agent(&prev.agent_code).is_some_and(|current| {
                    current.is_manager() && index.covers(&prev.agent_code, current, property)
                })
            });

            next.property_code.clone_from(&event.value);
            if !manager_keeps_selection {
                next.agent_code = property.map(|p| p.agent_code.clone()).unwrap_or_default();
            }
            tracing::debug!(
                property = %event.value,
                agent = %next.agent_code,
                manager_kept = manager_keeps_selection,
                "property selection applied"
            );
        }
        other @ FormField::Other(_) => next.set_field(&other, &event.value),
    }
    next
}

/// Wraps [`reduce`] as a deferred updater.
#[must_use]
pub fn updater(index: &LinkageIndex, event: FormEvent) -> FormUpdater<'_> {
    Box::new(move |prev: &Form| reduce(index, prev, &event))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::linkage::fixtures;

    fn apply(prev: &Form, name: &str, value: &str) -> Form {
        let engine = fixtures::admin_engine();
        reduce(engine.index(), prev, &FormEvent::new(name, value))
    }

    #[test]
    fn agent_change_clears_property() {
        let prev = Form::with_selection("AGT-1", "PROP-1");
        let next = apply(&prev, "agentCode", "AGT-2");

        assert_eq!(next.agent_code, "AGT-2");
        assert_eq!(next.property_code, "");
    }

    #[test]
    fn clearing_agent_also_clears_property() {
        let next = apply(&Form::with_selection("AGT-1", "PROP-1"), "agentCode", "");
        assert_eq!(next, Form::default());
    }

    #[test]
    fn property_drives_agent_to_owner() {
        let next = apply(&Form::with_selection("AGT-1", ""), "propertyCode", "PROP-3");

        assert_eq!(next.property_code, "PROP-3");
        assert_eq!(next.agent_code, "AGT-3");
    }

    #[test]
    fn property_fills_empty_agent() {
        let next = apply(&Form::default(), "propertyCode", "PROP-2");
        assert_eq!(next.agent_code, "AGT-2");
    }

    #[test]
    fn manager_stays_selected_for_team_property() {
        let next = apply(&Form::with_selection("MNG-1", ""), "propertyCode", "PROP-1");

        assert_eq!(next.agent_code, "MNG-1");
        assert_eq!(next.property_code, "PROP-1");
    }

    #[test]
    fn manager_yields_to_owner_outside_team() {
        let next = apply(&Form::with_selection("MNG-1", ""), "propertyCode", "PROP-3");
        assert_eq!(next.agent_code, "AGT-3");
    }

    #[test]
    fn unknown_property_clears_agent() {
        let next = apply(&Form::with_selection("AGT-1", ""), "propertyCode", "PROP-999");

        assert_eq!(next.property_code, "PROP-999");
        assert_eq!(next.agent_code, "");
    }

    #[test]
    fn other_fields_pass_through() {
        let prev = Form::with_selection("AGT-1", "PROP-1");
        let next = apply(&prev, "visitDate", "2026-03-01");

        assert_eq!(next.agent_code, "AGT-1");
        assert_eq!(next.property_code, "PROP-1");
        assert_eq!(next.extra.get("visitDate"), Some(&Value::String("2026-03-01".to_string())));
    }

    #[test]
    fn updater_reads_previous_form_at_apply_time() {
        let engine = fixtures::admin_engine();
        let update = updater(engine.index(), FormEvent::new("propertyCode", "PROP-1"));

        assert_eq!(update(&Form::with_selection("MNG-1", "")).agent_code, "MNG-1");
        assert_eq!(update(&Form::with_selection("AGT-3", "")).agent_code, "AGT-1");
    }
}
