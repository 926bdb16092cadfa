//! Style rules: a selector paired with style properties.

use crate::selector::Selector;
use crate::Properties;

/// Opaque handle identifying a rule inside a [`GraphStyle`](crate::GraphStyle).
///
/// Handles are never reused within one resolver, so a handle to a removed
/// rule stays dangling instead of pointing at a newer rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub(crate) u64);

/// A selector and the properties it applies.
///
/// A rule with fewer classifiers is broader: `node` matches every node,
/// `node.Person` matches every node labelled `Person`, whatever else it
/// is labelled with.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub(crate) id: RuleId,
    pub(crate) selector: Selector,
    pub(crate) properties: Properties,
}

impl StyleRule {
    pub(crate) fn new(id: RuleId, selector: Selector, properties: Properties) -> Self {
        Self {
            id,
            selector,
            properties,
        }
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the property value, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Returns `true` if this rule applies to elements described by `selector`.
    ///
    /// Tags must be equal and every classifier of this rule must be present
    /// among the classifiers of `selector`.
    pub fn matches(&self, selector: &Selector) -> bool {
        if self.selector.tag() != selector.tag() {
            return false;
        }
        self.selector
            .classifiers()
            .iter()
            .all(|class| selector.classifiers().contains(class))
    }

    /// Returns `true` if this rule matches and has exactly as many
    /// classifiers as `selector`.
    pub fn matches_exact(&self, selector: &Selector) -> bool {
        self.matches(selector)
            && self.selector.classifiers().len() == selector.classifiers().len()
    }

    /// Merges `properties` into this rule, overwriting existing keys.
    pub(crate) fn merge(&mut self, properties: &Properties) {
        for (key, value) in properties {
            self.properties.insert(key.clone(), value.clone());
        }
    }
}
