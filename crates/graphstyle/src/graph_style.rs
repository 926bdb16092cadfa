//! The style resolver.

use std::fmt;

use tracing::{debug, warn};

use crate::caption::{self, default_caption};
use crate::defaults::{PaletteEntry, StyleDefaults};
use crate::element::{StyleElement, CAPTION, DEFAULT_CAPTION};
use crate::entity::{Entity, GraphNode, GraphRelationship};
use crate::error::GraphStyleError;
use crate::rule::{RuleId, StyleRule};
use crate::selector::{ElementTag, Selector};
use crate::stylesheet::{self, Stylesheet};
use crate::Properties;

/// An ordered list of style rules with lookup, automatic defaults and
/// (de)serialization.
///
/// Rules are applied in list order, so a later rule overrides an earlier
/// one on conflicting properties. Nothing is cached: every lookup scans
/// the full rule list.
///
/// The resolver has no internal synchronization. Share it across threads
/// only behind a lock.
///
/// # Example
///
/// ```rust
/// use graphstyle::{GraphNode, GraphStyle};
///
/// let mut style = GraphStyle::new();
/// style.import_stylesheet("node.Person { color: #C990C0; caption: '{name}'; }").unwrap();
///
/// let alice = GraphNode::new("1").with_label("Person").with_property("name", "Alice");
/// let resolved = style.for_node(&alice);
/// assert_eq!(resolved.get("color"), "#C990C0");
/// assert_eq!(style.interpolate(resolved.get("caption"), &alice), "Alice");
/// ```
#[derive(Debug, Clone)]
pub struct GraphStyle {
    rules: Vec<StyleRule>,
    defaults: StyleDefaults,
    next_id: u64,
}

impl GraphStyle {
    /// Creates a resolver loaded with the built-in defaults.
    pub fn new() -> Self {
        let defaults = StyleDefaults::builtin();
        let mut style = Self {
            rules: Vec::new(),
            defaults,
            next_id: 0,
        };
        if let Err(err) = style.load_rules(None) {
            warn!(error = %err, "built-in stylesheet rejected");
        }
        style
    }

    /// Creates a resolver with alternative default tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the default stylesheet contains an invalid selector.
    pub fn with_defaults(defaults: StyleDefaults) -> Result<Self, GraphStyleError> {
        let mut style = Self {
            rules: Vec::new(),
            defaults,
            next_id: 0,
        };
        style.load_rules(None)?;
        Ok(style)
    }

    pub fn defaults(&self) -> &StyleDefaults {
        &self.defaults
    }

    /// Returns the rules in application order.
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Replaces every rule with the rules of `sheet`, or of the default
    /// stylesheet when `sheet` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector key is invalid. The previous rules are
    /// kept in that case.
    pub fn load_rules(&mut self, sheet: Option<&Stylesheet>) -> Result<&mut Self, GraphStyleError> {
        let sheet = sheet.unwrap_or(&self.defaults.stylesheet);
        let mut next_id = self.next_id;
        let mut rules = Vec::with_capacity(sheet.len());
        for (key, properties) in sheet.iter() {
            let selector: Selector = key.parse()?;
            rules.push(StyleRule::new(RuleId(next_id), selector, properties.clone()));
            next_id += 1;
        }
        debug!(rules = rules.len(), "loaded style rules");
        self.rules = rules;
        self.next_id = next_id;
        Ok(self)
    }

    /// Restores the default stylesheet.
    ///
    /// Returns `true` when the default rules were loaded.
    pub fn reset_to_default(&mut self) -> bool {
        match self.load_rules(None) {
            Ok(_) => true,
            Err(err) => {
                warn!(error = %err, "failed to reset style rules");
                false
            }
        }
    }

    /// Parses stylesheet text without touching the current rules.
    pub fn parse(&self, text: &str) -> Stylesheet {
        Stylesheet::parse(text)
    }

    /// Parses stylesheet text and replaces every rule with its rules.
    ///
    /// Parsing is lenient (see [`Stylesheet::parse`]).
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is invalid; the current rules are kept.
    pub fn import_stylesheet(&mut self, text: &str) -> Result<(), GraphStyleError> {
        let sheet = Stylesheet::parse(text);
        debug!(rules = sheet.len(), "importing stylesheet");
        if let Err(err) = self.load_rules(Some(&sheet)) {
            warn!(error = %err, "stylesheet import rejected, keeping current rules");
            return Err(err);
        }
        Ok(())
    }

    /// Like [`import_stylesheet`](Self::import_stylesheet), but rejects text
    /// with structural problems (see [`Stylesheet::parse_strict`]).
    ///
    /// # Errors
    ///
    /// Returns the first parse diagnostic or an invalid selector; the
    /// current rules are kept.
    pub fn import_stylesheet_strict(&mut self, text: &str) -> Result<(), GraphStyleError> {
        let sheet = Stylesheet::parse_strict(text).map_err(|err| {
            warn!(error = %err, "stylesheet import rejected, keeping current rules");
            err
        })?;
        self.load_rules(Some(&sheet))?;
        Ok(())
    }

    /// Computes the style for `selector` from the current rules.
    pub fn calculate_style(&self, selector: &Selector) -> StyleElement {
        StyleElement::new(selector.clone()).apply_rules(&self.rules)
    }

    /// Resolves the style for a node.
    ///
    /// A node with labels first gets automatic defaults: a palette color if
    /// no rule for its labels sets `color`, and a `defaultCaption` if none
    /// sets `caption` or `defaultCaption`. Both are inferred once per label,
    /// from the first node seen with it.
    pub fn for_node(&mut self, node: &GraphNode) -> StyleElement {
        self.for_entity(node)
    }

    /// Resolves the style for a relationship.
    pub fn for_relationship(&self, rel: &GraphRelationship) -> StyleElement {
        self.calculate_style(&rel.selector())
    }

    /// Resolves the style for any element, applying automatic defaults for
    /// labelled nodes.
    pub fn for_entity(&mut self, entity: &dyn Entity) -> StyleElement {
        let selector = entity.selector();
        if selector.tag() == ElementTag::Node && !selector.classifiers().is_empty() {
            self.set_default_node_styling(&selector, entity);
        }
        self.calculate_style(&selector)
    }

    fn set_default_node_styling(&mut self, selector: &Selector, entity: &dyn Entity) {
        let mut needs_color = true;
        let mut needs_caption = true;
        for rule in &self.rules {
            if !rule.selector().classifiers().is_empty() && rule.matches(selector) {
                if rule.properties().contains_key("color") {
                    needs_color = false;
                }
                if rule.properties().contains_key(CAPTION)
                    || rule.properties().contains_key(DEFAULT_CAPTION)
                {
                    needs_caption = false;
                }
            }
        }

        let minimal = selector.minimal();
        if needs_color {
            if let Some(entry) = self.available_default_color() {
                let properties = entry.to_properties();
                debug!(selector = %minimal, color = %entry.color, "assigning default color");
                self.change_for_selector(&minimal, &properties);
            }
        }
        if needs_caption {
            let properties = Properties::from([(DEFAULT_CAPTION.to_string(), default_caption(entity))]);
            self.change_for_selector(&minimal, &properties);
        }
    }

    /// Picks the palette entry at (rules with a color) - 1, wrapping to the
    /// first entry once the palette is exhausted.
    fn available_default_color(&self) -> Option<PaletteEntry> {
        let palette = &self.defaults.palette;
        if palette.is_empty() {
            return None;
        }
        let used = self
            .rules
            .iter()
            .filter(|rule| rule.properties().contains_key("color"))
            .count();
        let index = match used.checked_sub(1) {
            Some(index) if index < palette.len() => index,
            _ => 0,
        };
        palette.get(index).cloned()
    }

    /// Returns the rule whose selector matches `selector` exactly.
    pub fn find_rule(&self, selector: &Selector) -> Option<&StyleRule> {
        self.rules.iter().find(|rule| rule.matches_exact(selector))
    }

    /// Merges `properties` into the rule for `selector`, appending a new
    /// rule when none matches exactly.
    pub fn change_for_selector(&mut self, selector: &Selector, properties: &Properties) -> &StyleRule {
        let index = match self.rules.iter().position(|rule| rule.matches_exact(selector)) {
            Some(index) => index,
            None => {
                let id = RuleId(self.next_id);
                self.next_id += 1;
                self.rules
                    .push(StyleRule::new(id, selector.clone(), Properties::new()));
                self.rules.len() - 1
            }
        };
        let rule = &mut self.rules[index];
        rule.merge(properties);
        rule
    }

    /// Removes the rule with the given id, returning it if it was present.
    pub fn remove_rule(&mut self, id: RuleId) -> Option<StyleRule> {
        let index = self.rules.iter().position(|rule| rule.id() == id)?;
        Some(self.rules.remove(index))
    }

    /// Returns the rules as a selector-string mapping.
    ///
    /// Rules whose selectors render to the same string collapse into the
    /// last one.
    pub fn to_sheet(&self) -> Stylesheet {
        self.rules
            .iter()
            .map(|rule| (rule.selector().to_string(), rule.properties().clone()))
            .collect()
    }

    /// Renders every rule in the stylesheet text format.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            stylesheet::write_rule(&mut out, &rule.selector().to_string(), rule.properties());
        }
        out
    }

    /// Renders a caption template for an element.
    ///
    /// See [`caption::interpolate`].
    pub fn interpolate(&self, template: &str, entity: &dyn Entity) -> String {
        caption::interpolate(template, entity)
    }

    pub fn default_sizes(&self) -> &[Properties] {
        &self.defaults.sizes
    }

    pub fn default_icon_codes(&self) -> &[Properties] {
        &self.defaults.icon_codes
    }

    pub fn default_array_widths(&self) -> &[Properties] {
        &self.defaults.shaft_widths
    }

    pub fn default_colors(&self) -> &[PaletteEntry] {
        &self.defaults.palette
    }
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GraphStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
