//! The resolved style of one graph element.

use crate::rule::StyleRule;
use crate::selector::Selector;
use crate::Properties;

/// Property set by automatic defaults; used when no `caption` is set.
pub const DEFAULT_CAPTION: &str = "defaultCaption";

/// Property holding the caption template.
pub const CAPTION: &str = "caption";

/// The effective properties for one element, folded from every matching rule.
///
/// A `StyleElement` is computed fresh on every lookup and is not updated when
/// the rules change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleElement {
    selector: Selector,
    properties: Properties,
}

impl StyleElement {
    /// Creates an element with no properties.
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            properties: Properties::new(),
        }
    }

    /// Applies every matching rule in order; later rules win on conflicts.
    ///
    /// When no rule set a non-empty `caption`, the `defaultCaption`
    /// property is copied into `caption`.
    pub fn apply_rules<'a, I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = &'a StyleRule>,
    {
        for rule in rules {
            if rule.matches(&self.selector) {
                for (key, value) in rule.properties() {
                    self.properties.insert(key.clone(), value.clone());
                }
            }
        }
        if self.get(CAPTION).is_empty() {
            if let Some(fallback) = self.properties.get(DEFAULT_CAPTION).cloned() {
                self.properties.insert(CAPTION.to_string(), fallback);
            }
        }
        self
    }

    /// Returns the property value, or an empty string when unset.
    pub fn get(&self, name: &str) -> &str {
        self.properties.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn into_properties(self) -> Properties {
        self.properties
    }
}
