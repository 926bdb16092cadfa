//! Caption templates: default inference and interpolation.
//!
//! A caption template is text with `{property}` placeholders, for example
//! `{name} ({born})`. Two marker templates stand for the element itself:
//! [`ID_MARKER`] renders the element id and [`TYPE_MARKER`] renders the
//! relationship type.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Number, Value};

use crate::entity::Entity;
use crate::selector::ElementTag;

/// Caption that renders the element id.
pub const ID_MARKER: &str = "<id>";

/// Caption that renders the relationship type.
pub const TYPE_MARKER: &str = "<type>";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder pattern is valid"));

// Highest priority first.
static CAPTION_PRIORITY: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^name$",
        r"(?i)^title$",
        r"(?i)^label$",
        r"(?i)name$",
        r"(?i)description$",
        r"^.+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("caption pattern is valid"))
    .collect()
});

/// Infers a caption template from an element's property keys.
///
/// Keys are tested against a fixed priority list: exactly `name`, exactly
/// `title`, exactly `label`, ending in `name`, ending in `description`,
/// then any key (all case-insensitive). The first key matching the
/// highest-priority pattern wins and the result is `{key}`. Elements
/// without properties get [`ID_MARKER`].
///
/// # Example
///
/// ```rust
/// use graphstyle::{caption::default_caption, GraphNode};
///
/// let node = GraphNode::new("1").with_property("id", "x").with_property("name", "Alice");
/// assert_eq!(default_caption(&node), "{name}");
/// ```
pub fn default_caption(entity: &dyn Entity) -> String {
    let keys = entity.property_keys();
    CAPTION_PRIORITY
        .iter()
        .find_map(|pattern| keys.iter().find(|key| pattern.is_match(key)))
        .map(|key| format!("{{{}}}", key))
        .unwrap_or_else(|| ID_MARKER.to_string())
}

/// Renders a caption template for an element.
///
/// Each `{property}` is replaced with the property value: strings and
/// numbers as text, arrays joined with `, `, anything else (including
/// missing properties) as an empty string. When the template is exactly
/// `{type}` on a relationship or `{id}` on a node and renders empty, the
/// matching marker is used instead. A result that is exactly a marker is
/// replaced with the element's id or type.
pub fn interpolate(template: &str, entity: &dyn Entity) -> String {
    let mut rendered = PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            entity.property(&caps[1]).map(render_value).unwrap_or_default()
        })
        .into_owned();

    if rendered.is_empty() {
        match (template, entity.tag()) {
            ("{type}", ElementTag::Relationship) => rendered = TYPE_MARKER.to_string(),
            ("{id}", ElementTag::Node) => rendered = ID_MARKER.to_string(),
            _ => {}
        }
    }

    match rendered.as_str() {
        ID_MARKER => entity.id().to_string(),
        TYPE_MARKER => entity.type_name().unwrap_or_default().to_string(),
        _ => rendered,
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        Value::Array(items) => items
            .iter()
            .map(render_array_item)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

fn render_array_item(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        other => other.to_string(),
    }
}

// Floats print without a trailing `.0`, so 2.0 renders as `2`.
fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}
