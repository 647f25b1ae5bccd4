//! Graph vertices

use std::fmt;

use super::attribute::{Attribute, AttributeList};
use crate::constants::dot::LABEL_KEY;

/// A named vertex in a DOT graph
///
/// The name identifies the node inside its graph and is not the text that
/// Graphviz displays; that is the `label` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    attributes: AttributeList,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: AttributeList::new(),
        }
    }

    pub fn with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name).with_attribute(LABEL_KEY, label)
    }

    /// Creates a node with an optional label, ready for chained configuration
    pub fn create(name: impl Into<String>, label: Option<&str>) -> Self {
        match label {
            Some(label) => Self::with_label(name, label),
            None => Self::new(name),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets or replaces the attribute stored under the lowercased `name`
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [\n{}\n]", self.name, self.attributes)
    }
}
