//! Ordered property view exposed by resource handles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a single property entry.
///
/// Tags are kept apart from plain fields so their keys can be stored exactly
/// as the provider returned them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum PropertyKey {
    /// A plain descriptive field such as `Name` or `CreatedTime`.
    Field(String),
    /// A provider-attached tag.
    Tag(String),
}

impl PropertyKey {
    /// Returns the raw key without the `tag:` display prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(name) | Self::Tag(name) => name,
        }
    }

    /// Returns `true` for tag keys.
    #[must_use]
    pub const fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Tag(key) => write!(f, "tag:{key}"),
        }
    }
}

/// One key/value entry of a [`Properties`] view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    key: PropertyKey,
    value: String,
}

impl Property {
    /// Returns the entry key.
    #[must_use]
    pub const fn key(&self) -> &PropertyKey {
        &self.key
    }

    /// Returns the entry value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered key/value accumulator describing one resource.
///
/// Entries keep insertion order and duplicate keys are retained, so a
/// provider that returns the same tag twice is reported faithfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    entries: Vec<Property>,
}

impl Properties {
    /// Creates an empty property view.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a plain field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(PropertyKey::Field(key.into()), value.into())
    }

    /// Appends a tag entry. Key and value are stored untransformed.
    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.push(PropertyKey::Tag(key.into()), value.into())
    }

    fn push(&mut self, key: PropertyKey, value: String) -> &mut Self {
        self.entries.push(Property { key, value });
        self
    }

    /// Returns the value of the first plain field named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.find(|candidate| matches!(candidate, PropertyKey::Field(name) if name == key))
    }

    /// Returns the value of the first tag named `key`.
    #[must_use]
    pub fn get_tag(&self, key: &str) -> Option<&str> {
        self.find(|candidate| matches!(candidate, PropertyKey::Tag(name) if name == key))
    }

    fn find(&self, predicate: impl Fn(&PropertyKey) -> bool) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| predicate(&entry.key))
            .map(Property::value)
    }

    /// Iterates over all entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.entries.iter()
    }

    /// Iterates over tag entries as raw `(key, value)` pairs.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|entry| entry.key.is_tag())
            .map(|entry| (entry.key.name(), entry.value.as_str()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entries have been set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {:?}", entry.key, entry.value)?;
        }
        f.write_str("]")
    }
}
