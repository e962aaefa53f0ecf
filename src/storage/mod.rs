//! Persistence layer.
//!
//! Saves and loads run reports to/from a JSON file so an outer suite
//! (or a human) can inspect the last run without re-reading logs.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

use crate::types::RunReport;

/// Default report file path.
const DEFAULT_REPORT_FILE: &str = "herald_report.json";

/// Save a run report to a JSON file.
pub fn save_report(report: &RunReport, path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_REPORT_FILE);
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialise run report")?;

    std::fs::write(path, &json)
        .context(format!("Failed to write report to {path}"))?;

    debug!(path, run_id = %report.run_id, "Report saved");
    Ok(())
}

/// Load a run report from a JSON file.
/// Returns None if the file doesn't exist (no previous run).
pub fn load_report(path: Option<&str>) -> Result<Option<RunReport>> {
    let path = path.unwrap_or(DEFAULT_REPORT_FILE);

    if !Path::new(path).exists() {
        info!(path, "No saved report found");
        return Ok(None);
    }

    let json = std::fs::read_to_string(path)
        .context(format!("Failed to read report from {path}"))?;

    let report: RunReport = serde_json::from_str(&json)
        .context(format!("Failed to parse report from {path}"))?;

    info!(
        path,
        run_id = %report.run_id,
        steps = report.steps.len(),
        passed = report.passed(),
        failed = report.failed(),
        "Report loaded from disk"
    );

    Ok(Some(report))
}

/// Delete the report file (for testing or reset).
pub fn delete_report(path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_REPORT_FILE);
    if Path::new(path).exists() {
        std::fs::remove_file(path)
            .context(format!("Failed to delete report file {path}"))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
