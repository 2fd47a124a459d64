use crate::error::SensesError;
use crate::model::scores::{DimensionScores, clip01};

#[derive(Debug, Clone, PartialEq)]
pub struct Stage4Output {
    pub composite: f64,
    pub rounded: DimensionScores,
    pub report: String,
}

pub fn run_stage4(scores: &DimensionScores, precision: u32) -> Result<Stage4Output, SensesError> {
    let composite = composite_score(scores)?;
    let rounded = scores.rounded(precision);
    let report = serde_json::to_string(&rounded)?;
    Ok(Stage4Output {
        composite,
        rounded,
        report,
    })
}

/// Unweighted mean of the five unrounded dimension scores.
pub fn composite_score(scores: &DimensionScores) -> Result<f64, SensesError> {
    let values = scores.values();
    let composite = values.iter().sum::<f64>() / values.len() as f64;
    if !composite.is_finite() {
        return Err(SensesError::Internal {
            stage: "aggregate",
            dimension: None,
            detail: format!("non-finite composite {composite}"),
        });
    }
    Ok(clip01(composite))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_aggregate.rs"]
mod tests;
