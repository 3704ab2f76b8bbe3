//! Static accessibility attributes for the linked selectors.

use serde::Serialize;

/// Id of the notice shown when the selected agent has no property.
pub const NO_PROPERTY_MESSAGE_ID: &str = "no-property-message";

/// ARIA attributes for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AriaAttributes {
    /// Element id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'static str>,
    /// Landmark or live-region role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    /// `aria-label`.
    #[serde(rename = "aria-label", skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    /// `aria-describedby`.
    #[serde(rename = "aria-describedby", skip_serializing_if = "Option::is_none")]
    pub described_by: Option<&'static str>,
    /// `aria-live`.
    #[serde(rename = "aria-live", skip_serializing_if = "Option::is_none")]
    pub live: Option<&'static str>,
    /// `aria-required`.
    #[serde(rename = "aria-required", skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl AriaAttributes {
    const EMPTY: Self =
        Self { id: None, role: None, label: None, described_by: None, live: None, required: None };
}

/// ARIA bundles for the agent selector, the property selector and the
/// empty-selection notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AriaProps {
    /// Agent or manager selector.
    pub agent_dropdown: AriaAttributes,
    /// Property selector.
    pub property_dropdown: AriaAttributes,
    /// Notice shown when nothing can be selected.
    pub no_property_message: AriaAttributes,
}

/// The bundle every view carries.
pub const ARIA_PROPS: AriaProps = AriaProps {
    agent_dropdown: AriaAttributes {
        label: Some("Select agent or manager"),
        required: Some(true),
        ..AriaAttributes::EMPTY
    },
    property_dropdown: AriaAttributes {
        label: Some("Select property"),
        described_by: Some(NO_PROPERTY_MESSAGE_ID),
        required: Some(true),
        ..AriaAttributes::EMPTY
    },
    no_property_message: AriaAttributes {
        id: Some(NO_PROPERTY_MESSAGE_ID),
        role: Some("status"),
        live: Some("polite"),
        ..AriaAttributes::EMPTY
    },
};
