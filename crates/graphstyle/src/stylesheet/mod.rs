//! The stylesheet text format and its mapping form.
//!
//! A stylesheet is a list of rule blocks, each keyed by a selector string:
//!
//! ```text
//! node {
//!   diameter: 50px;
//!   color: #A5ABB6;
//! }
//!
//! node.Person {
//!   color: #C990C0;
//!   caption: '{name}';
//! }
//! ```
//!
//! Whitespace outside of quotes is ignored in selectors. Single quotes
//! delimit text in which braces are not structural; the quotes themselves
//! are not part of the value.
//!
//! The same data is available as a [`Stylesheet`] mapping, which serializes
//! through serde as a plain `selector -> { property -> value }` object.

mod error;
mod parser;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::element::CAPTION;
use crate::Properties;

pub use error::ParseError;

/// An ordered mapping of selector strings to properties.
///
/// Order is first-seen order; a repeated selector replaces the earlier
/// properties but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stylesheet {
    rules: IndexMap<String, Properties>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses stylesheet text, never failing.
    ///
    /// Malformed input degrades to fewer rules: unterminated blocks,
    /// trailing selectors and blocks without a selector (such as the one a
    /// stray `}` closes) are dropped, and property pieces without a key or
    /// value are skipped. Use [`parse_strict`](Self::parse_strict) to reject
    /// such input instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphstyle::Stylesheet;
    ///
    /// let sheet = Stylesheet::parse("node.Foo { color: red; caption: 'it: works' }");
    /// let props = sheet.get("node.Foo").unwrap();
    /// assert_eq!(props["color"], "red");
    /// assert_eq!(props["caption"], "it");
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut blocks = parser::scan(text).blocks;
        blocks.retain(|selector, _| !selector.is_empty());
        Self::from_blocks(blocks)
    }

    /// Parses stylesheet text, failing on the first structural problem.
    pub fn parse_strict(text: &str) -> Result<Self, ParseError> {
        let scan = parser::scan(text);
        if let Some(err) = scan.diagnostics.into_iter().next() {
            return Err(err);
        }
        Ok(Self::from_blocks(scan.blocks))
    }

    fn from_blocks(blocks: IndexMap<String, String>) -> Self {
        Self {
            rules: blocks
                .into_iter()
                .map(|(selector, body)| (selector, parser::split_properties(&body)))
                .collect(),
        }
    }

    /// Inserts or replaces the properties for `selector`.
    pub fn insert(&mut self, selector: impl Into<String>, properties: Properties) {
        self.rules.insert(selector.into(), properties);
    }

    pub fn get(&self, selector: &str) -> Option<&Properties> {
        self.rules.get(selector)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates `(selector, properties)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Properties)> + '_ {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the stylesheet in the text format.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (selector, properties) in self.iter() {
            write_rule(&mut out, selector, properties);
        }
        out
    }
}

impl FromIterator<(String, Properties)> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = (String, Properties)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl From<IndexMap<String, Properties>> for Stylesheet {
    fn from(rules: IndexMap<String, Properties>) -> Self {
        Self { rules }
    }
}

impl IntoIterator for Stylesheet {
    type Item = (String, Properties);
    type IntoIter = indexmap::map::IntoIter<String, Properties>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

/// Appends one rule block.
///
/// The caption value is single-quoted, as is any other value containing a
/// brace, so that the block reads back unchanged.
pub(crate) fn write_rule(out: &mut String, selector: &str, properties: &Properties) {
    out.push_str(selector);
    out.push_str(" {\n");
    for (key, value) in properties {
        if key == CAPTION || value.contains(['{', '}']) {
            out.push_str(&format!("  {}: '{}';\n", key, value));
        } else {
            out.push_str(&format!("  {}: {};\n", key, value));
        }
    }
    out.push_str("}\n\n");
}
