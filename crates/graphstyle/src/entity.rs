//! Graph elements as seen by the style engine.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::selector::{ElementTag, Selector};

/// A graph element that can be styled and captioned.
pub trait Entity {
    /// Whether this is a node or a relationship.
    fn tag(&self) -> ElementTag;

    fn id(&self) -> &str;

    /// Labels for a node, or the single type for a relationship.
    fn classifiers(&self) -> Vec<&str>;

    /// The relationship type; `None` for nodes.
    fn type_name(&self) -> Option<&str>;

    fn property(&self, key: &str) -> Option<&Value>;

    /// Property keys in their stored order.
    fn property_keys(&self) -> Vec<&str>;

    /// Returns the selector describing this element.
    fn selector(&self) -> Selector {
        Selector::new(self.tag(), self.classifiers())
    }
}

/// A node with labels and properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
}

impl GraphNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl Entity for GraphNode {
    fn tag(&self) -> ElementTag {
        ElementTag::Node
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn classifiers(&self) -> Vec<&str> {
        self.labels.iter().map(String::as_str).collect()
    }

    fn type_name(&self) -> Option<&str> {
        None
    }

    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    fn property_keys(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }
}

/// A relationship with an optional type and properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphRelationship {
    pub id: String,
    #[serde(rename = "type", default)]
    pub rel_type: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
}

impl GraphRelationship {
    pub fn new(id: impl Into<String>, rel_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rel_type: Some(rel_type.into()),
            properties: IndexMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl Entity for GraphRelationship {
    fn tag(&self) -> ElementTag {
        ElementTag::Relationship
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn classifiers(&self) -> Vec<&str> {
        self.rel_type.as_deref().into_iter().collect()
    }

    fn type_name(&self) -> Option<&str> {
        self.rel_type.as_deref()
    }

    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    fn property_keys(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }
}
