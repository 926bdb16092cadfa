//! Default tables: the built-in stylesheet and the presets used for new labels.
//!
//! [`StyleDefaults`] is the configuration handed to a
//! [`GraphStyle`](crate::GraphStyle). The built-in values are available from
//! [`StyleDefaults::builtin`]; alternative tables can be loaded from YAML or
//! JSON, with any missing field falling back to the built-in value:
//!
//! ```yaml
//! palette:
//!   - color: "#604A0E"
//!     border-color: "#423204"
//!     text-color-internal: "#FFFFFF"
//! stylesheet:
//!   node:
//!     diameter: 40px
//! ```

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::DefaultsError;
use crate::stylesheet::Stylesheet;
use crate::Properties;

/// The stylesheet every resolver starts from.
pub const BUILTIN_STYLESHEET: &str = "
node {
  diameter: 50px;
  color: pink;
  border-color: pink;
  border-width: 2px;
  text-color-internal: #FFFFFF;
  font-size: 10px;
}

relationship {
  color: pink;
  shaft-width: 1px;
  font-size: 8px;
  padding: 3px;
  text-color-external: #000000;
  text-color-internal: #FFFFFF;
  caption: '<type>';
}
";

const SIZES: &[&str] = &["10px", "20px", "50px", "65px", "80px"];

const ICON_CODES: &[&str] = &["a", "\"", "z", "_", "/", ">", "k"];

const SHAFT_WIDTHS: &[&str] = &["1px", "2px", "3px", "5px", "8px", "13px", "25px", "38px"];

// (color, border-color, text-color-internal)
const PALETTE: &[(&str, &str, &str)] = &[
    ("#604A0E", "#423204", "#FFFFFF"),
    ("#C990C0", "#b261a5", "#FFFFFF"),
    ("#F79767", "#f36924", "#FFFFFF"),
    ("#57C7E3", "#23b3d7", "#2A2C34"),
    ("#F16667", "#eb2728", "#FFFFFF"),
    ("#D9C8AE", "#c0a378", "#2A2C34"),
    ("#8DCC93", "#5db665", "#2A2C34"),
    ("#ECB5C9", "#da7298", "#2A2C34"),
    ("#4C8EDA", "#2870c2", "#FFFFFF"),
    ("#FFC454", "#d7a013", "#2A2C34"),
    ("#DA7194", "#cc3c6c", "#FFFFFF"),
    ("#569480", "#447666", "#FFFFFF"),
];

static BUILTIN: Lazy<StyleDefaults> = Lazy::new(|| StyleDefaults {
    stylesheet: Stylesheet::parse(BUILTIN_STYLESHEET),
    sizes: presets("diameter", SIZES),
    icon_codes: presets("icon-code", ICON_CODES),
    shaft_widths: presets("shaft-width", SHAFT_WIDTHS),
    palette: PALETTE
        .iter()
        .map(|&(color, border, text)| PaletteEntry::new(color, border, text))
        .collect(),
});

fn presets(property: &str, values: &[&str]) -> Vec<Properties> {
    values
        .iter()
        .map(|value| Properties::from([(property.to_string(), value.to_string())]))
        .collect()
}

/// One automatically assignable color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PaletteEntry {
    pub color: String,
    pub border_color: String,
    pub text_color_internal: String,
}

impl PaletteEntry {
    pub fn new(
        color: impl Into<String>,
        border_color: impl Into<String>,
        text_color_internal: impl Into<String>,
    ) -> Self {
        Self {
            color: color.into(),
            border_color: border_color.into(),
            text_color_internal: text_color_internal.into(),
        }
    }

    /// Returns the entry as style properties.
    pub fn to_properties(&self) -> Properties {
        Properties::from([
            ("color".to_string(), self.color.clone()),
            ("border-color".to_string(), self.border_color.clone()),
            (
                "text-color-internal".to_string(),
                self.text_color_internal.clone(),
            ),
        ])
    }
}

/// Configuration for a resolver: its base stylesheet and preset tables.
///
/// The tables are only read, never modified, by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
    /// Rules loaded on construction and on reset.
    pub stylesheet: Stylesheet,
    /// Node size presets (`diameter`).
    pub sizes: Vec<Properties>,
    /// Node icon presets (`icon-code`).
    pub icon_codes: Vec<Properties>,
    /// Relationship width presets (`shaft-width`).
    pub shaft_widths: Vec<Properties>,
    /// Colors assigned to newly seen labels, in order.
    pub palette: Vec<PaletteEntry>,
}

impl StyleDefaults {
    /// Returns the built-in defaults.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Replaces the base stylesheet.
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Replaces the color palette.
    pub fn with_palette(mut self, palette: Vec<PaletteEntry>) -> Self {
        self.palette = palette;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, DefaultsError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DefaultsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads defaults from a file, as JSON when the extension is `.json`
    /// and as YAML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DefaultsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DefaultsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}
