//! DOT attributes and the ordered attribute list shared by nodes, edges and
//! graphs

use std::fmt;

use crate::constants::dot::{RAW_VALUE_PREFIX, URL_KEY, URL_KEY_RENDERED};

/// A single `key=value` pair attached to a node, edge or graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    key: String,
    value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn set_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value is an HTML-like literal that must not be quoted
    pub fn is_raw(&self) -> bool {
        self.value.starts_with(RAW_VALUE_PREFIX)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Graphviz only recognizes the hyperlink attribute in upper case
        let key = if self.key == URL_KEY {
            URL_KEY_RENDERED
        } else {
            self.key.as_str()
        };

        if self.is_raw() {
            write!(f, "{key}={}", self.value)
        } else {
            write!(f, "{key}=\"{}\"", self.value)
        }
    }
}

/// Attributes keyed by their lowercased name, kept in insertion order
///
/// Any attribute name can be set without being declared first. Replacing an
/// existing attribute keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    entries: Vec<Attribute>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let key = name.to_lowercase();
        let attribute = Attribute::new(key.as_str(), value);

        match self.entries.iter_mut().find(|a| a.key == key) {
            Some(existing) => *existing = attribute,
            None => self.entries.push(attribute),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        let key = name.to_lowercase();
        self.entries.iter().find(|a| a.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attribute) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{attribute}")?;
        }
        Ok(())
    }
}
