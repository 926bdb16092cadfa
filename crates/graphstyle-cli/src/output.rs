//! Output formats.

use std::io::Write;

use anyhow::Context;
use clap::ValueEnum;
use serde::Serialize;

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The stylesheet text format (stylesheets only)
    Grass,
    Json,
    Yaml,
}

/// Writes `value` as pretty JSON or YAML.
pub(crate) fn write_data<T: Serialize, W: Write>(
    value: &T,
    format: Format,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, value).context("failed to write JSON")?;
            writeln!(out)?;
        }
        Format::Yaml => {
            serde_yaml::to_writer(&mut *out, value).context("failed to write YAML")?;
        }
        Format::Grass => anyhow::bail!("the grass format only applies to stylesheets"),
    }
    Ok(())
}
