pub mod stage1_validate;
pub mod stage2_outliers;
pub mod stage3_dimensions;
pub mod stage4_aggregate;

use crate::error::SensesError;
use crate::model::config::SensesConfig;
use crate::model::diagnostics::Diagnostics;
use crate::model::ratings::{NOVELTY_INDICATORS, RatingsInput};
use crate::model::scores::DimensionScores;
use stage1_validate::validate;
use stage2_outliers::filter_outliers;
use stage3_dimensions::{Stage3Inputs, run_stage3};
use stage4_aggregate::run_stage4;

/// Result of one scoring call.
#[derive(Debug, Clone, PartialEq)]
pub struct SensesOutcome {
    /// Unrounded dimension scores; `composite` is their mean.
    pub scores: DimensionScores,
    pub rounded: DimensionScores,
    pub composite: f64,
    /// Rounded scores serialized as a JSON object in hear, see, smell, touch, taste order.
    pub report: String,
    pub diagnostics: Diagnostics,
}

impl SensesOutcome {
    pub fn into_pair(self) -> (String, f64) {
        (self.report, self.composite)
    }
}

/// Runs validate -> outlier filter -> dimension scoring -> aggregation.
///
/// Either every stage succeeds and a complete outcome is returned, or the
/// first error is returned and nothing else.
pub fn compute_senses(
    input: &RatingsInput,
    config: &SensesConfig,
) -> Result<SensesOutcome, SensesError> {
    tracing::debug!(
        z_threshold = config.z_threshold,
        outlier_rule = ?config.outlier_rule,
        range_policy = ?config.range_policy,
        "starting SENSES computation"
    );

    let mut validated = validate(input, config)?;
    let mut diagnostics = std::mem::take(&mut validated.diagnostics);

    let filtered = filter_outliers(&validated.novelty, config.z_threshold, config.outlier_rule);
    if !filtered.rejected.is_empty() {
        tracing::debug!(
            rejected = filtered.rejected.len(),
            kept = filtered.kept.len(),
            "novelty outliers removed"
        );
    }
    diagnostics.extend(filtered.to_diagnostics(NOVELTY_INDICATORS, config.z_threshold));

    let stage3 = run_stage3(&Stage3Inputs {
        coherence: &validated.coherence,
        structural: &validated.structural,
        novelty: &filtered.kept,
        successes: &validated.successes,
        likability: &validated.likability,
        smell: config.smell,
    })?;
    diagnostics.extend(stage3.diagnostics);

    let stage4 = run_stage4(&stage3.scores, config.precision)?;

    tracing::debug!(
        composite = stage4.composite,
        diagnostics = diagnostics.len(),
        "SENSES computation completed"
    );

    Ok(SensesOutcome {
        scores: stage3.scores,
        rounded: stage4.rounded,
        composite: stage4.composite,
        report: stage4.report,
        diagnostics,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
