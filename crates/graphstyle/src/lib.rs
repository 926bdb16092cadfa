//! # Graphstyle - Selector-based styling for graph visualisation
//!
//! Graphstyle maps graph elements (nodes and relationships) to presentation
//! properties such as `color`, `diameter`, `shaft-width` and `caption`,
//! using a small CSS-like rule system.
//!
//! ## Core Concepts
//!
//! - [`Selector`]: a tag (`node` / `relationship`) plus classifiers (labels or types)
//! - [`StyleRule`]: a selector and the properties it sets
//! - [`StyleElement`]: the properties resolved for one element
//! - [`Stylesheet`]: the text and mapping form of a rule set
//! - [`GraphStyle`]: the resolver owning the rule list
//! - [`StyleDefaults`]: the base stylesheet and preset tables a resolver starts from
//!
//! ## Resolution
//!
//! Every rule whose classifiers are a subset of the element's classifiers
//! applies, in rule-list order. A later rule overrides an earlier one on
//! the properties both set:
//!
//! ```rust
//! use graphstyle::{GraphNode, GraphStyle};
//!
//! let mut style = GraphStyle::new();
//! style.import_stylesheet("
//!     node { diameter: 50px; color: #A5ABB6; }
//!     node.Person { color: #C990C0; }
//!     node.Person.Director { diameter: 80px; }
//! ").unwrap();
//!
//! let node = GraphNode::new("1").with_label("Person").with_label("Director");
//! let resolved = style.for_node(&node);
//! assert_eq!(resolved.get("color"), "#C990C0");
//! assert_eq!(resolved.get("diameter"), "80px");
//! ```
//!
//! ## Automatic Defaults
//!
//! The first time a labelled node is resolved and no rule for its labels
//! sets a color, the next palette entry is stored as a rule for its
//! lexicographically-first label. Likewise a `defaultCaption` is inferred
//! from its property keys (preferring `name`, `title`, `label`, ...) and
//! used whenever no rule sets `caption`.
//!
//! ## Stylesheet Text
//!
//! ```text
//! node.Person {
//!   color: #C990C0;
//!   caption: '{name}';
//! }
//! ```
//!
//! [`GraphStyle::to_text`] writes this format and
//! [`GraphStyle::import_stylesheet`] reads it back. [`GraphStyle::to_sheet`]
//! returns the same rules as a serde-serializable mapping.

pub mod caption;
pub mod defaults;
pub mod element;
pub mod entity;
pub mod error;
pub mod graph_style;
pub mod rule;
pub mod selector;
pub mod stylesheet;

/// Style properties: ordered property name to value pairs.
pub type Properties = indexmap::IndexMap<String, String>;

pub use caption::{default_caption, interpolate, ID_MARKER, TYPE_MARKER};
pub use defaults::{PaletteEntry, StyleDefaults};
pub use element::StyleElement;
pub use entity::{Entity, GraphNode, GraphRelationship};
pub use error::{DefaultsError, GraphStyleError};
pub use graph_style::GraphStyle;
pub use rule::{RuleId, StyleRule};
pub use selector::{ElementTag, Selector};
pub use stylesheet::{ParseError, Stylesheet};
