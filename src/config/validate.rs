// src/config/validate.rs

use crate::config::model::{RawWorkFile, ScheduleSection, WorkFile};
use crate::dag::WorkItemSpec;
use crate::errors::{Result, WorkGraphError};

impl TryFrom<RawWorkFile> for WorkFile {
    type Error = WorkGraphError;

    fn try_from(raw: RawWorkFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_items(&raw)?;
        validate_schedule(&raw.schedule)?;
        let items = convert_items(raw.item)?;
        validate_durations(&items)?;
        Ok(WorkFile::new_unchecked(raw.schedule, items))
    }
}

fn ensure_has_items(raw: &RawWorkFile) -> Result<()> {
    if raw.item.is_empty() {
        return Err(WorkGraphError::ConfigError(
            "work file must contain at least one [item.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_schedule(schedule: &ScheduleSection) -> Result<()> {
    check_days("[schedule].ready_delay", schedule.ready_delay)?;
    check_days("[schedule].default_duration", schedule.default_duration)?;
    Ok(())
}

fn convert_items(table: toml::Table) -> Result<Vec<(String, WorkItemSpec)>> {
    table
        .into_iter()
        .map(|(name, value)| {
            let spec = value.try_into::<WorkItemSpec>().map_err(|e| {
                WorkGraphError::ConfigError(format!("invalid [item.{name}]: {e}"))
            })?;
            Ok((name, spec))
        })
        .collect()
}

fn validate_durations(items: &[(String, WorkItemSpec)]) -> Result<()> {
    for (name, spec) in items {
        if let Some(duration) = spec.duration {
            check_days(&format!("[item.{name}].duration"), duration)?;
        }
    }
    Ok(())
}

fn check_days(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(WorkGraphError::ConfigError(format!(
            "{field} must be a finite number >= 0 (got {value})"
        )));
    }
    Ok(())
}
