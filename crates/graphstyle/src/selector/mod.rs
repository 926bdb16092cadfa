//! Selectors identify a class of graph element.
//!
//! This module provides:
//!
//! - [`ElementTag`]: the primary tag, `node` or `relationship`
//! - [`Selector`]: a tag plus zero or more classifiers (labels or types)
//! - [`parse_selector_string`] / [`selector_array_to_string`]: the selector
//!   string codec used by the stylesheet formats

mod codec;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphStyleError;

pub use codec::{parse_selector_string, selector_array_to_string};

/// The primary tag of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementTag {
    Node,
    Relationship,
}

impl ElementTag {
    /// Returns the textual form used in selector strings.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementTag::Node => "node",
            ElementTag::Relationship => "relationship",
        }
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementTag {
    type Err = GraphStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(ElementTag::Node),
            "relationship" => Ok(ElementTag::Relationship),
            other => Err(GraphStyleError::InvalidSelector {
                selector: other.to_string(),
                reason: format!("unknown tag '{}'", other),
            }),
        }
    }
}

/// A tag plus an ordered list of classifiers.
///
/// Classifier order is kept for display, but matching treats the
/// classifiers as a set (see [`StyleRule::matches`](crate::StyleRule::matches)).
///
/// # Example
///
/// ```rust
/// use graphstyle::Selector;
///
/// let selector: Selector = "node.Person.Employee".parse().unwrap();
/// assert_eq!(selector.classifiers(), ["Person", "Employee"]);
/// assert_eq!(selector.to_string(), "node.Person.Employee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    tag: ElementTag,
    classifiers: Vec<String>,
}

impl Selector {
    /// Creates a selector from a tag and classifiers.
    ///
    /// Empty classifiers are dropped, as they have no string form.
    pub fn new<I, S>(tag: ElementTag, classifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag,
            classifiers: classifiers
                .into_iter()
                .map(Into::into)
                .filter(|classifier: &String| !classifier.is_empty())
                .collect(),
        }
    }

    /// Creates a node selector for the given labels.
    pub fn node<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ElementTag::Node, labels)
    }

    /// Creates a relationship selector, with the type as its only classifier.
    pub fn relationship(rel_type: Option<&str>) -> Self {
        Self::new(ElementTag::Relationship, rel_type)
    }

    pub fn tag(&self) -> ElementTag {
        self.tag
    }

    pub fn classifiers(&self) -> &[String] {
        &self.classifiers
    }

    /// Returns the selector with the same tag and only the
    /// lexicographically-first classifier.
    ///
    /// This is the selector automatic defaults are attached to.
    pub fn minimal(&self) -> Self {
        Self {
            tag: self.tag,
            classifiers: self.classifiers.iter().min().cloned().into_iter().collect(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(self.classifiers.len() + 1);
        parts.push(self.tag.as_str());
        parts.extend(self.classifiers.iter().map(String::as_str));
        f.write_str(&selector_array_to_string(&parts))
    }
}

impl FromStr for Selector {
    type Err = GraphStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = parse_selector_string(s).into_iter();
        let Some(tag) = parts.next() else {
            return Err(GraphStyleError::InvalidSelector {
                selector: s.to_string(),
                reason: "empty selector".to_string(),
            });
        };
        let tag = tag.parse::<ElementTag>().map_err(|_| GraphStyleError::InvalidSelector {
            selector: s.to_string(),
            reason: format!("unknown tag '{}'", tag),
        })?;
        Ok(Self {
            tag,
            classifiers: parts.collect(),
        })
    }
}
