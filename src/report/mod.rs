pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SensesError;
use crate::model::config::SensesConfig;
use crate::pipeline::SensesOutcome;
use json::render_summary_json;
use text::render_report_text;

pub const TOOL_NAME: &str = "senses-qc";

pub fn format_score(v: f64, precision: u32) -> String {
    format!("{:.*}", precision as usize, v)
}

/// Writes `senses.json`, `summary.json` and `report.txt` into `out_dir`.
pub fn write_reports(
    outcome: &SensesOutcome,
    config: &SensesConfig,
    out_dir: &Path,
) -> Result<(), SensesError> {
    fs::create_dir_all(out_dir)?;

    write_text(&out_dir.join("senses.json"), &outcome.report)?;

    let summary = render_summary_json(outcome, config)?;
    write_text(&out_dir.join("summary.json"), &summary)?;

    let report = render_report_text(outcome, config);
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
