//! Engine facade bundling the index, the derived options and the
//! linked-form operations.

use serde::Serialize;

use crate::model::{Agent, CurrentUser, Form, FormEvent, LoadingFlags, Manager, Property};

use super::aria::{AriaProps, ARIA_PROPS};
use super::change::{self, FormUpdater};
use super::filter::{self, UnresolvedAgentPolicy};
use super::index::LinkageIndex;
use super::options::{self, AgentOption, PropertyOption};
use super::pool::build_agent_pool;
use super::validate::{validate_selection, LinkageMismatch, LinkedSelection};

/// Raw lists and the acting user, as supplied by the data layer.
#[derive(Debug, Clone, Copy)]
pub struct LinkageInputs<'a> {
    /// All properties visible to the user.
    pub properties: &'a [Property],
    /// All agents visible to the user.
    pub agents: &'a [Agent],
    /// All managers visible to the user.
    pub managers: &'a [Manager],
    /// The user operating the form.
    pub user: &'a CurrentUser,
    /// Fetch state, carried through to the view.
    pub loading: LoadingFlags,
}

/// Everything a form needs to render the linked selectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkageView {
    /// Agent selector options, managers first.
    pub agent_options: Vec<AgentOption>,
    /// Property options narrowed to the current selection.
    pub property_options: Vec<PropertyOption>,
    /// Whether the property selector must be locked.
    pub property_dropdown_disabled: bool,
    /// Accessibility attributes.
    pub aria_props: AriaProps,
    /// Fetch state of the source lists.
    pub loading: LoadingFlags,
}

/// Derived state over one snapshot of the source lists.
///
/// Build a new engine whenever the lists or the acting user change; call
/// [`LinkageEngine::view`] whenever the form changes.
#[derive(Debug, Clone)]
pub struct LinkageEngine {
    index: LinkageIndex,
    agent_options: Vec<AgentOption>,
    property_options: Vec<PropertyOption>,
    policy: UnresolvedAgentPolicy,
    loading: LoadingFlags,
}

impl LinkageEngine {
    /// Indexes the inputs and derives the unfiltered options.
    #[must_use]
    pub fn new(inputs: &LinkageInputs<'_>) -> Self {
        let pool = build_agent_pool(inputs.agents, inputs.managers, inputs.user);
        let index = LinkageIndex::build(inputs.properties, &pool);
        let agent_options = options::agent_options(&pool, &index);
        let property_options = options::property_options(inputs.properties, &index);

        Self {
            index,
            agent_options,
            property_options,
            policy: UnresolvedAgentPolicy::default(),
            loading: inputs.loading,
        }
    }

    /// Sets how unresolvable agent codes filter the property selector.
    #[must_use]
    pub fn with_policy(mut self, policy: UnresolvedAgentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Lookup tables.
    #[must_use]
    pub fn index(&self) -> &LinkageIndex {
        &self.index
    }

    /// Agent selector options.
    #[must_use]
    pub fn agent_options(&self) -> &[AgentOption] {
        &self.agent_options
    }

    /// Property options before any filtering.
    #[must_use]
    pub fn all_property_options(&self) -> &[PropertyOption] {
        &self.property_options
    }

    /// Property options the given agent or manager may be paired with.
    #[must_use]
    pub fn filtered_properties(&self, agent_code: &str) -> Vec<PropertyOption> {
        filter::filter_properties(&self.property_options, &self.index, agent_code, self.policy)
    }

    /// Derives the selector state for a form.
    #[must_use]
    pub fn view(&self, form: &Form) -> LinkageView {
        let property_options = self.filtered_properties(&form.agent_code);
        let property_dropdown_disabled =
            filter::property_dropdown_disabled(&form.agent_code, &property_options);

        LinkageView {
            agent_options: self.agent_options.clone(),
            property_options,
            property_dropdown_disabled,
            aria_props: ARIA_PROPS,
            loading: self.loading,
        }
    }

    /// Hands `set_form` an updater applying the linked change.
    pub fn handle_linked_change<S>(&self, event: FormEvent, set_form: S)
    where
        S: FnOnce(FormUpdater<'_>),
    {
        set_form(change::updater(&self.index, event));
    }

    /// Returns the form that follows `prev` after `event`.
    #[must_use]
    pub fn reduce(&self, prev: &Form, event: &FormEvent) -> Form {
        change::reduce(&self.index, prev, event)
    }

    /// Applies `event` to a form in place.
    pub fn apply_change(&self, form: &mut Form, event: &FormEvent) {
        *form = self.reduce(form, event);
    }

    /// Checks an agent/property pair.
    ///
    /// # Errors
    ///
    /// Returns the [`LinkageMismatch`] describing why the pair is rejected.
    pub fn validate_agent_property_match<S>(&self, selection: &S) -> Result<(), LinkageMismatch>
    where
        S: LinkedSelection + ?Sized,
    {
        validate_selection(&self.index, selection)
    }

    /// Validates a form before it is sent to the create/update endpoint.
    ///
    /// # Errors
    ///
    /// Returns the [`LinkageMismatch`] to surface to the user; nothing
    /// should be submitted in that case.
    pub fn prepare_submission(&self, form: &Form) -> Result<Form, LinkageMismatch> {
        self.validate_agent_property_match(form).inspect_err(|err| {
            tracing::info!(agent = %form.agent_code, property = %form.property_code, %err, "submission blocked");
        })?;
        Ok(form.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkage::fixtures;
    use crate::model::Role;

    #[test]
    fn view_filters_by_form_agent() {
        let engine = fixtures::admin_engine();
        let view = engine.view(&Form::with_selection("MNG-1", ""));

        let codes: Vec<&str> = view.property_options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(codes, vec!["PROP-1", "PROP-2", "PROP-4"]);
        assert!(!view.property_dropdown_disabled);
        assert_eq!(view.agent_options.len(), 6);
    }

    #[test]
    fn view_disables_selector_for_agent_without_properties() {
        let engine = fixtures::admin_engine();
        assert!(engine.view(&Form::with_selection("AGT-4", "")).property_dropdown_disabled);
        assert!(engine.view(&Form::with_selection("MNG-2", "")).property_dropdown_disabled);
        assert!(!engine.view(&Form::default()).property_dropdown_disabled);
    }

    #[test]
    fn view_is_stable_across_rebuilds() {
        let form = Form::with_selection("AGT-2", "");
        let first = fixtures::admin_engine().view(&form);
        let second = fixtures::admin_engine().view(&form);
        assert_eq!(first, second);
    }

    #[test]
    fn fail_closed_policy_disables_unknown_agent() {
        let engine = fixtures::admin_engine().with_policy(UnresolvedAgentPolicy::ShowNone);
        let view = engine.view(&Form::with_selection("AGT-404", ""));

        assert!(view.property_options.is_empty());
        assert!(view.property_dropdown_disabled);
    }

    #[test]
    fn handle_linked_change_passes_updater_to_host() {
        let engine = fixtures::admin_engine();
        let mut state = Form::with_selection("AGT-1", "PROP-1");

        engine.handle_linked_change(FormEvent::new("agentCode", "MNG-1"), |update| {
            state = update(&state);
        });
        assert_eq!(state, Form::with_selection("MNG-1", ""));

        engine.handle_linked_change(FormEvent::new("propertyCode", "PROP-2"), |update| {
            state = update(&state);
        });
        assert_eq!(state, Form::with_selection("MNG-1", "PROP-2"));
    }

    #[test]
    fn apply_change_mutates_in_place() {
        let engine = fixtures::admin_engine();
        let mut form = Form::with_selection("AGT-1", "");
        engine.apply_change(&mut form, &FormEvent::new("propertyCode", "PROP-3"));
        assert_eq!(form, Form::with_selection("AGT-3", "PROP-3"));
    }

    #[test]
    fn prepare_submission_blocks_mismatch() {
        let engine = fixtures::admin_engine();

        let ok = Form::with_selection("AGT-2", "PROP-4");
        assert_eq!(engine.prepare_submission(&ok), Ok(ok.clone()));

        let bad = Form::with_selection("MNG-1", "PROP-3");
        assert_eq!(engine.prepare_submission(&bad), Err(LinkageMismatch::OutsideManagerTeam));
    }

    #[test]
    fn manager_user_sees_own_team_only() {
        let engine = fixtures::engine_for(&CurrentUser::new(Role::Manager, "MNG-1", "Mia"));
        let labels: Vec<&str> = engine.agent_options().iter().map(|o| o.label.as_str()).collect();

        assert_eq!(labels[0], "MNG-1 - Mia (Manager)");
        assert!(!labels.iter().any(|l| l.starts_with("MNG-2")));
        assert_eq!(engine.filtered_properties("MNG-1").len(), 3);
    }

    #[test]
    fn manager_user_is_not_member_of_own_team() {
        let mut properties = fixtures::properties();
        properties.push(Property::new("PROP-5", "Mia's Own", "MNG-1"));
        let agents = fixtures::agents();
        let user = CurrentUser::new(Role::Manager, "MNG-1", "Mia");
        let engine = LinkageEngine::new(&LinkageInputs {
            properties: &properties,
            agents: &agents,
            managers: &[],
            user: &user,
            loading: LoadingFlags::default(),
        });

        let codes: Vec<String> =
            engine.filtered_properties("MNG-1").into_iter().map(|o| o.value).collect();
        assert!(!codes.contains(&"PROP-5".to_string()));
    }

    #[test]
    fn loading_flags_pass_through() {
        let properties = fixtures::properties();
        let user = fixtures::admin();
        let loading = LoadingFlags { all_agents_loading: true, ..LoadingFlags::default() };
        let engine = LinkageEngine::new(&LinkageInputs {
            properties: &properties,
            agents: &[],
            managers: &[],
            user: &user,
            loading,
        });
        assert!(engine.view(&Form::default()).loading.all_agents_loading);
    }
}
