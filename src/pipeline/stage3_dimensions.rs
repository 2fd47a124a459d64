use crate::error::SensesError;
use crate::model::config::SmellNormalization;
use crate::model::diagnostics::{DiagnosticReason, DiagnosticRecord, DiagnosticStage, Diagnostics};
use crate::model::scores::{Dimension, DimensionScores, clip01};
use crate::stats::{max_abs, mean, mean_abs, running_mean, true_fraction};

/// Score assigned to a dimension whose source sequence is empty.
pub const NEUTRAL_SCORE: f64 = 0.0;

#[derive(Debug, Clone, Copy)]
pub struct Stage3Inputs<'a> {
    pub coherence: &'a [f64],
    pub structural: &'a [f64],
    pub novelty: &'a [f64],
    pub successes: &'a [bool],
    pub likability: &'a [f64],
    pub smell: SmellNormalization,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub scores: DimensionScores,
    pub diagnostics: Diagnostics,
}

pub fn run_stage3(inputs: &Stage3Inputs<'_>) -> Result<Stage3Output, SensesError> {
    let mut diagnostics = Diagnostics::default();

    let raw = [
        (Dimension::Hear, mean(inputs.coherence)),
        (Dimension::See, mean(inputs.structural)),
        (Dimension::Smell, smell_score(inputs.novelty, inputs.smell)),
        (Dimension::Touch, true_fraction(inputs.successes)),
        (Dimension::Taste, mean(inputs.likability).map(rescale_likability)),
    ];

    let mut values = [NEUTRAL_SCORE; 5];
    for (slot, (dimension, score)) in values.iter_mut().zip(raw) {
        *slot = finalize(dimension, score, &mut diagnostics)?;
    }
    let [hear, see, smell, touch, taste] = values;

    Ok(Stage3Output {
        scores: DimensionScores {
            hear,
            see,
            smell,
            touch,
            taste,
        },
        diagnostics,
    })
}

/// Maps the mean absolute novelty deviation into [0, 1].
pub fn smell_score(novelty: &[f64], normalization: SmellNormalization) -> Option<f64> {
    match normalization {
        SmellNormalization::PeakRatio => {
            let peak = max_abs(novelty);
            let denom = if peak > 0.0 { peak } else { 1.0 };
            running_mean(novelty.iter().map(|v| v.abs() / denom))
        }
        SmellNormalization::Saturating => {
            let m = mean_abs(novelty)?;
            Some(m / (1.0 + m))
        }
    }
}

/// Rescales a mean likability in [1, 5] onto [0, 1].
pub fn rescale_likability(mean: f64) -> f64 {
    (mean - 1.0) / 4.0
}

fn finalize(
    dimension: Dimension,
    score: Option<f64>,
    diagnostics: &mut Diagnostics,
) -> Result<f64, SensesError> {
    let Some(score) = score else {
        tracing::debug!(dimension = dimension.key(), "empty input, using neutral score");
        diagnostics.push(DiagnosticRecord {
            stage: DiagnosticStage::Score,
            field: dimension.source_field(),
            index: None,
            value: None,
            reason: DiagnosticReason::EmptyInput,
            detail: format!("no values left; {} set to {NEUTRAL_SCORE}", dimension.key()),
        });
        return Ok(NEUTRAL_SCORE);
    };
    if !score.is_finite() {
        return Err(SensesError::Internal {
            stage: "score",
            dimension: Some(dimension),
            detail: format!("non-finite score {score}"),
        });
    }
    Ok(clip01(score))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_dimensions.rs"]
mod tests;
