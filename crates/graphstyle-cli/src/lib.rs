//! Command-line front end for graphstyle.
//!
//! ```text
//! graphstyle check styles.grass
//! graphstyle export --stylesheet styles.grass --format json
//! graphstyle resolve --graph graph.json --stylesheet styles.grass
//! ```
//!
//! Every command accepts `--defaults FILE` to replace the built-in default
//! tables with a YAML or JSON [`StyleDefaults`](graphstyle::StyleDefaults)
//! document.

mod commands;
mod output;

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

pub use commands::{load_stylesheet, GraphInput, ResolvedElement, ResolvedGraph};
pub use output::Format;

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "graphstyle", version, about = "Inspect, convert and apply graph stylesheets")]
pub struct Cli {
    /// YAML or JSON file replacing the built-in default tables
    #[arg(long, global = true, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a stylesheet, reporting the first structural problem
    Check {
        /// Stylesheet file (text format)
        file: PathBuf,
    },
    /// Print the effective stylesheet
    Export {
        /// Stylesheet replacing the default rules
        #[arg(long, value_name = "FILE")]
        stylesheet: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Grass)]
        format: Format,
    },
    /// Resolve the style and caption of every element in a graph
    Resolve {
        /// JSON file with `nodes` and `relationships`
        #[arg(long, value_name = "FILE")]
        graph: PathBuf,

        /// Stylesheet replacing the default rules
        #[arg(long, value_name = "FILE")]
        stylesheet: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

/// Runs a parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    match &cli.command {
        Command::Check { file } => commands::check(file, out),
        Command::Export { stylesheet, format } => {
            let style = commands::build_style(cli.defaults.as_deref(), stylesheet.as_deref())?;
            commands::export(&style, *format, out)
        }
        Command::Resolve {
            graph,
            stylesheet,
            format,
        } => {
            let mut style = commands::build_style(cli.defaults.as_deref(), stylesheet.as_deref())?;
            commands::resolve(&mut style, graph, *format, out)
        }
    }
}
