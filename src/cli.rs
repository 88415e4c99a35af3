// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `workgraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "workgraph",
    version,
    about = "Derive states, reduced graphs and schedules from work-item dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the work file (TOML).
    ///
    /// Default: `Workgraph.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Workgraph.toml", global = true)]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WORKGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every item with its derived state.
    States,

    /// Show the dependency closure of one item.
    Subgraph {
        /// Item whose dependencies to extract.
        name: String,
    },

    /// Show the graph with redundant edges removed.
    Reduce,

    /// Compute start/end days for every open item.
    Schedule {
        /// Overrides `[schedule].ready_delay`.
        #[arg(long, value_name = "DAYS")]
        ready_delay: Option<f64>,

        /// Overrides `[schedule].default_duration`.
        #[arg(long, value_name = "DAYS")]
        default_duration: Option<f64>,
    },

    /// Minimum dependency hops from an item to everything it depends on.
    Distances {
        root: String,
    },

    /// Items that depend directly on the given item.
    Rdeps {
        name: String,
    },

    /// List milestone items.
    Milestones,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
