//! Accessibility records for the trellis UI core.
//!
//! A pure projection from node props to the semantic record the external
//! Renderer emits into platform accessibility trees. Completely independent
//! of geometry and paint: nothing here reads or affects layout.

#![forbid(unsafe_code)]

use log::warn;
use serde::{Deserialize, Serialize};

/// Semantic role keywords the tree layer may pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    None,
    Button,
    Link,
    Image,
    Text,
    Search,
    Header,
    Summary,
    Alert,
    Checkbox,
    Radio,
    ProgressBar,
    Slider,
    Switch,
}

impl Role {
    /// Parse a role keyword; unrecognized text maps to [`Role::None`] with a
    /// warning rather than failing the node.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "none" => Self::None,
            "button" => Self::Button,
            "link" => Self::Link,
            "image" => Self::Image,
            "text" => Self::Text,
            "search" => Self::Search,
            "header" => Self::Header,
            "summary" => Self::Summary,
            "alert" => Self::Alert,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "progressbar" => Self::ProgressBar,
            "slider" => Self::Slider,
            "switch" => Self::Switch,
            other => {
                warn!(
                    target: "trellis::accessibility",
                    "unrecognized accessibility role {other:?}"
                );
                Self::None
            }
        }
    }
}

/// Named boolean states, all defaulting to false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityState {
    pub disabled: bool,
    pub selected: bool,
    pub checked: bool,
    pub expanded: bool,
    pub busy: bool,
}

/// A numeric value range with optional display text (sliders, progress).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityValue {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub now: Option<f64>,
    pub text: Option<String>,
}

/// The props a node carries, exactly as the tree layer hands them over.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessibilityProps {
    /// Whether the node is an accessibility element at all.
    pub accessible: bool,
    pub accessibility_label: Option<String>,
    pub accessibility_role: Option<String>,
    pub accessibility_state: Option<AccessibilityState>,
    pub accessibility_value: Option<AccessibilityValue>,
}

/// The record the Renderer consumes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessibilityRecord {
    /// Whether the Renderer should expose this node at all.
    pub accessible: bool,
    pub label: Option<String>,
    pub role: Role,
    pub state: AccessibilityState,
    pub value: AccessibilityValue,
}

/// Project node props into an accessibility record.
///
/// All fields optional; absent state collapses to all-false, absent value to
/// all-absent. Pure function, no interaction with layout or paint.
pub fn build(props: &AccessibilityProps) -> AccessibilityRecord {
    AccessibilityRecord {
        accessible: props.accessible,
        label: props.accessibility_label.clone(),
        role: props
            .accessibility_role
            .as_deref()
            .map_or(Role::None, Role::from_keyword),
        state: props.accessibility_state.unwrap_or_default(),
        value: props.accessibility_value.clone().unwrap_or_default(),
    }
}
