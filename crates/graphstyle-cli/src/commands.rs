//! Command implementations.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use graphstyle::{
    Entity, GraphNode, GraphRelationship, GraphStyle, Properties, StyleDefaults, StyleElement,
    Stylesheet,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::output::{write_data, Format};

/// Graph document read by `resolve`.
#[derive(Debug, Default, Deserialize)]
pub struct GraphInput {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub relationships: Vec<GraphRelationship>,
}

/// The resolved style of one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedElement {
    pub id: String,
    pub selector: String,
    /// The interpolated caption text.
    pub caption: String,
    pub style: Properties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedGraph {
    pub nodes: Vec<ResolvedElement>,
    pub relationships: Vec<ResolvedElement>,
}

/// Reads a stylesheet: `.json`, `.yaml` and `.yml` files hold the mapping
/// form, anything else the text format (parsed strictly).
pub fn load_stylesheet(path: &Path) -> anyhow::Result<Stylesheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stylesheet '{}'", path.display()))?;
    let sheet = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str::<Stylesheet>(&content)
            .with_context(|| format!("invalid JSON stylesheet '{}'", path.display()))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str::<Stylesheet>(&content)
            .with_context(|| format!("invalid YAML stylesheet '{}'", path.display()))?,
        _ => Stylesheet::parse_strict(&content)
            .with_context(|| format!("invalid stylesheet '{}'", path.display()))?,
    };
    Ok(sheet)
}

/// Builds the resolver from optional defaults and stylesheet files.
pub(crate) fn build_style(
    defaults: Option<&Path>,
    stylesheet: Option<&Path>,
) -> anyhow::Result<GraphStyle> {
    let defaults = match defaults {
        Some(path) => StyleDefaults::from_file(path)?,
        None => StyleDefaults::builtin(),
    };
    let mut style = GraphStyle::with_defaults(defaults).context("invalid default stylesheet")?;
    if let Some(path) = stylesheet {
        let sheet = load_stylesheet(path)?;
        style
            .load_rules(Some(&sheet))
            .with_context(|| format!("cannot apply stylesheet '{}'", path.display()))?;
        info!(path = %path.display(), rules = style.rules().len(), "stylesheet loaded");
    }
    Ok(style)
}

pub(crate) fn check<W: Write>(file: &Path, out: &mut W) -> anyhow::Result<()> {
    let sheet = load_stylesheet(file)?;
    for (selector, _) in sheet.iter() {
        selector
            .parse::<graphstyle::Selector>()
            .with_context(|| format!("invalid stylesheet '{}'", file.display()))?;
    }
    writeln!(out, "{}: {} rules", file.display(), sheet.len())?;
    Ok(())
}

pub(crate) fn export<W: Write>(style: &GraphStyle, format: Format, out: &mut W) -> anyhow::Result<()> {
    match format {
        Format::Grass => write!(out, "{}", style.to_text())?,
        other => write_data(&style.to_sheet(), other, out)?,
    }
    Ok(())
}

pub(crate) fn resolve<W: Write>(
    style: &mut GraphStyle,
    graph: &Path,
    format: Format,
    out: &mut W,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(graph)
        .with_context(|| format!("failed to read graph '{}'", graph.display()))?;
    let input: GraphInput = serde_json::from_str(&content)
        .with_context(|| format!("invalid graph document '{}'", graph.display()))?;

    // Nodes go first and in order, so palette assignment is deterministic.
    let nodes: Vec<_> = input
        .nodes
        .iter()
        .map(|node| {
            let element = style.for_node(node);
            resolved(style, element, node)
        })
        .collect();
    let relationships: Vec<_> = input
        .relationships
        .iter()
        .map(|rel| {
            let element = style.for_relationship(rel);
            resolved(style, element, rel)
        })
        .collect();

    write_data(
        &ResolvedGraph {
            nodes,
            relationships,
        },
        format,
        out,
    )
}

fn resolved(style: &GraphStyle, element: StyleElement, entity: &dyn Entity) -> ResolvedElement {
    ResolvedElement {
        id: entity.id().to_string(),
        selector: element.selector().to_string(),
        caption: style.interpolate(element.get("caption"), entity),
        style: element.into_properties(),
    }
}
