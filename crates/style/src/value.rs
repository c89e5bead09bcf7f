//! Property values as they arrive from the external tree layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single style property value.
///
/// Fragments come from a dynamically-typed tree-construction layer, so a
/// property is a number, a piece of text, a flag, or a nested record
/// (`accessibilityState`-shaped objects). The untagged representation maps
/// JSON fragments onto this enum directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value; bare numbers are CSS px in this engine.
    Number(f64),
    /// Textual value: keywords, colors, dimensions like `"50%"`, gradient strings.
    Text(String),
    /// Boolean flag.
    Truth(bool),
    /// Nested record, replaced wholesale on merge (never deep-merged).
    Record(BTreeMap<String, StyleValue>),
}

impl StyleValue {
    /// The value as an `f64` if it is numeric.
    #[inline]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as text if it is textual.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The value as a boolean if it is one.
    #[inline]
    pub const fn as_truth(&self) -> Option<bool> {
        match self {
            Self::Truth(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The value as a nested record if it is one.
    #[inline]
    pub const fn as_record(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Record(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Truth(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if untagged deserialization picks the wrong variant.
    fn deserializes_untagged_variants() {
        let number: StyleValue = serde_json::from_str("40").expect("number");
        assert_eq!(number, StyleValue::Number(40.0));

        let text: StyleValue = serde_json::from_str("\"#4c9afa\"").expect("text");
        assert_eq!(text, StyleValue::Text("#4c9afa".to_owned()));

        let truth: StyleValue = serde_json::from_str("true").expect("truth");
        assert_eq!(truth, StyleValue::Truth(true));

        let record: StyleValue = serde_json::from_str("{\"selected\": true}").expect("record");
        let entries = record.as_record().expect("record variant");
        assert_eq!(entries.get("selected"), Some(&StyleValue::Truth(true)));
    }
}
