//! Style fragments and the ordered merge that flattens them.

use crate::value::StyleValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One partial set of style properties, keyed by camelCase property name.
///
/// A fragment never knows about other fragments; composition happens only in
/// [`resolve`]. Absent fragments in an ordered list are represented by `None`
/// slots and contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFragment {
    entries: BTreeMap<String, StyleValue>,
}

impl StyleFragment {
    /// An empty fragment.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Set a property, replacing any previous value in this fragment.
    #[inline]
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.insert(property.into(), value.into());
    }

    /// Builder-style [`Self::set`].
    #[inline]
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Look up a property in this fragment alone.
    #[inline]
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries.get(property)
    }

    /// Iterate entries in property-name order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.entries.iter()
    }

    /// Whether the fragment carries no properties.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, StyleValue)> for StyleFragment {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The flattened result of merging an ordered fragment sequence.
///
/// Holds every key the fragments carried, including keys this engine does not
/// interpret; downstream layers read the keys they understand and ignore the
/// rest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    entries: BTreeMap<String, StyleValue>,
}

impl ResolvedStyle {
    /// An empty resolved style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Look up a resolved property.
    #[inline]
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries.get(property)
    }

    /// Overlay one fragment, later-wins per key. Nested records replace
    /// wholesale; there is no deep merge.
    pub fn apply(&mut self, fragment: &StyleFragment) {
        for (property, value) in fragment.iter() {
            self.entries.insert(property.clone(), value.clone());
        }
    }

    /// Number of resolved properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no properties resolved.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate resolved entries in property-name order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.entries.iter()
    }
}

/// Merge an ordered fragment sequence into one resolved style.
///
/// A single deterministic left-to-right fold: for each present fragment,
/// every key overwrites any earlier value (shallow merge). `None` slots are
/// skipped without error. Pure function of its input, and associative:
/// `resolve([A, B, C])` equals resolving `[merge(A, B), C]`.
pub fn resolve(fragments: &[Option<StyleFragment>]) -> ResolvedStyle {
    let mut resolved = ResolvedStyle::new();
    for fragment in fragments.iter().flatten() {
        resolved.apply(fragment);
    }
    resolved
}
