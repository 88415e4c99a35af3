// src/output.rs

//! Text and JSON rendering of query results for the CLI.
//!
//! Everything writes to a caller-supplied writer so the binary can use stdout
//! and tests can use a `Vec<u8>`.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::dag::{Schedule, WorkItem};

/// One line per item: name, state, and dependencies if any.
pub fn write_items<'a, W, I>(out: &mut W, format: OutputFormat, items: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a WorkItem>,
{
    let items: Vec<&WorkItem> = items.into_iter().collect();
    match format {
        OutputFormat::Json => write_json(out, &items),
        OutputFormat::Text => {
            let width = items.iter().map(|item| item.name.len()).max().unwrap_or(0);
            for item in items {
                write!(out, "{:<width$}  {:<10}", item.name, item.state.as_str())?;
                if !item.dependencies.is_empty() {
                    write!(out, "  <- {}", item.dependencies.join(", "))?;
                }
                if item.milestone {
                    write!(out, "  [milestone]")?;
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// One line per scheduled item: `name  start..end`.
pub fn write_schedule<W: Write>(out: &mut W, format: OutputFormat, schedule: &Schedule) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, schedule),
        OutputFormat::Text => {
            let width = schedule.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            for (name, span) in schedule.iter() {
                writeln!(out, "{name:<width$}  {}..{}", span.start, span.end)?;
            }
            if let Some(finish) = schedule.finish() {
                writeln!(out, "finish: {finish}")?;
            }
            Ok(())
        }
    }
}

pub fn write_distances<W: Write>(
    out: &mut W,
    format: OutputFormat,
    distances: &BTreeMap<String, usize>,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, distances),
        OutputFormat::Text => {
            let mut rows: Vec<(&String, &usize)> = distances.iter().collect();
            rows.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));
            for (name, distance) in rows {
                writeln!(out, "{distance}  {name}")?;
            }
            Ok(())
        }
    }
}

pub fn write_names<W: Write>(out: &mut W, format: OutputFormat, names: &[&str]) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, names),
        OutputFormat::Text => {
            for name in names {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
