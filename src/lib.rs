// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod output;

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::load_and_validate;

pub use crate::dag::{
    ItemId, ItemState, Reachability, Schedule, ScheduleOptions, Span, WorkGraph, WorkItem,
    WorkItemSpec,
};
pub use crate::errors::WorkGraphError;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the work file, builds the graph, runs the requested
/// query and writes the result to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_writer(args, &mut out)
}

/// Same as [`run`], writing to `out` instead of stdout.
pub fn run_with_writer<W: Write>(args: CliArgs, out: &mut W) -> Result<()> {
    let file = load_and_validate(&args.config)?;
    let graph = file.graph()?;
    info!(config = %args.config, items = graph.len(), "loaded work graph");

    let format = args.format;
    match args.command {
        Command::States => output::write_items(out, format, graph.items())?,
        Command::Subgraph { name } => {
            let sub = graph.subgraph(&name)?;
            output::write_items(out, format, sub.items())?;
        }
        Command::Reduce => {
            let reduced = graph.transitive_reduction();
            info!(
                before = graph.edge_count(),
                after = reduced.edge_count(),
                "reduced dependency edges"
            );
            output::write_items(out, format, reduced.items())?;
        }
        Command::Schedule {
            ready_delay,
            default_duration,
        } => {
            let base = file.schedule.options();
            let options = ScheduleOptions {
                ready_delay: ready_delay.unwrap_or(base.ready_delay),
                default_duration: default_duration.unwrap_or(base.default_duration),
            };
            debug!(?options, "scheduling");
            let schedule = graph.calculate_times(options);
            output::write_schedule(out, format, &schedule)?;
        }
        Command::Distances { root } => {
            let distances = graph.root_distances(&root)?;
            output::write_distances(out, format, &distances)?;
        }
        Command::Rdeps { name } => {
            if !graph.contains(&name) {
                return Err(WorkGraphError::UnknownItem(name).into());
            }
            output::write_names(out, format, &graph.reverse_dependencies(&name))?;
        }
        Command::Milestones => output::write_items(out, format, graph.milestones())?,
    }

    Ok(())
}
