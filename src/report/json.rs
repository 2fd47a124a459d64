use serde::Serialize;

use crate::error::SensesError;
use crate::model::config::SensesConfig;
use crate::model::diagnostics::{DiagnosticReason, DiagnosticRecord};
use crate::model::scores::DimensionScores;
use crate::pipeline::SensesOutcome;
use crate::report::TOOL_NAME;

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: ToolMeta,
    config: &'a SensesConfig,
    composite: f64,
    scores: &'a DimensionScores,
    scores_unrounded: &'a DimensionScores,
    diagnostics: DiagnosticsSummary<'a>,
}

#[derive(Debug, Serialize)]
struct ToolMeta {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct DiagnosticsSummary<'a> {
    dropped_out_of_range: usize,
    dropped_non_finite: usize,
    outliers_rejected: usize,
    empty_dimensions: usize,
    records: &'a [DiagnosticRecord],
}

pub fn render_summary_json(
    outcome: &SensesOutcome,
    config: &SensesConfig,
) -> Result<String, SensesError> {
    let d = &outcome.diagnostics;
    let summary = Summary {
        tool: ToolMeta {
            name: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
        },
        config,
        composite: outcome.composite,
        scores: &outcome.rounded,
        scores_unrounded: &outcome.scores,
        diagnostics: DiagnosticsSummary {
            dropped_out_of_range: d.count(DiagnosticReason::OutOfRange),
            dropped_non_finite: d.count(DiagnosticReason::NonFinite),
            outliers_rejected: d.count(DiagnosticReason::Outlier),
            empty_dimensions: d.count(DiagnosticReason::EmptyInput),
            records: &d.records,
        },
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}
