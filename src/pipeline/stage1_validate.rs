use crate::error::SensesError;
use crate::model::config::{RangePolicy, SensesConfig};
use crate::model::diagnostics::{DiagnosticReason, DiagnosticRecord, DiagnosticStage, Diagnostics};
use crate::model::ratings::{
    COHERENCE_RATINGS, LIKABILITY_SCORES, NOVELTY_INDICATORS, RatingsInput, STRUCTURAL_FEEDBACK,
};

pub const UNIT_BOUNDS: (f64, f64) = (0.0, 1.0);
pub const LIKABILITY_BOUNDS: (f64, f64) = (1.0, 5.0);

/// Sequences that passed validation. Under `RangePolicy::Drop` they may be
/// shorter than the raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRatings {
    pub coherence: Vec<f64>,
    pub structural: Vec<f64>,
    pub novelty: Vec<f64>,
    pub successes: Vec<bool>,
    pub likability: Vec<f64>,
    pub diagnostics: Diagnostics,
}

pub fn validate(
    input: &RatingsInput,
    config: &SensesConfig,
) -> Result<ValidatedRatings, SensesError> {
    config.validate()?;

    if config.require_equal_lengths {
        check_equal_lengths(input)?;
    }

    let mut diagnostics = Diagnostics::default();
    let policy = config.range_policy;

    let coherence = check_field(
        COHERENCE_RATINGS,
        &input.coherence_ratings,
        Some(UNIT_BOUNDS),
        policy,
        &mut diagnostics,
    )?;
    let structural = check_field(
        STRUCTURAL_FEEDBACK,
        &input.structural_feedback,
        Some(UNIT_BOUNDS),
        policy,
        &mut diagnostics,
    )?;
    let novelty = check_field(
        NOVELTY_INDICATORS,
        &input.novelty_indicators,
        None,
        policy,
        &mut diagnostics,
    )?;
    let likability = check_field(
        LIKABILITY_SCORES,
        &input.likability_scores,
        Some(LIKABILITY_BOUNDS),
        policy,
        &mut diagnostics,
    )?;

    if !diagnostics.is_empty() {
        tracing::debug!(
            dropped = diagnostics.len(),
            "validation dropped values under tolerant range policy"
        );
    }

    Ok(ValidatedRatings {
        coherence,
        structural,
        novelty,
        successes: input.application_successes.clone(),
        likability,
        diagnostics,
    })
}

fn check_equal_lengths(input: &RatingsInput) -> Result<(), SensesError> {
    let lengths = input.lengths();
    let first = lengths[0].1;
    if lengths.iter().all(|&(_, n)| n == first) {
        return Ok(());
    }
    let lengths = lengths
        .iter()
        .map(|(field, n)| format!("{field}={n}"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(SensesError::LengthMismatch { lengths })
}

fn check_field(
    field: &'static str,
    values: &[f64],
    bounds: Option<(f64, f64)>,
    policy: RangePolicy,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<f64>, SensesError> {
    let mut kept = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        let violation = if !value.is_finite() {
            Some(DiagnosticReason::NonFinite)
        } else {
            match bounds {
                Some((min, max)) if value < min || value > max => {
                    Some(DiagnosticReason::OutOfRange)
                }
                _ => None,
            }
        };

        let Some(reason) = violation else {
            kept.push(value);
            continue;
        };

        match policy {
            RangePolicy::Strict => return Err(violation_error(field, index, value, bounds, reason)),
            RangePolicy::Drop => {
                tracing::trace!(field, index, value, "dropping invalid value");
                diagnostics.push(DiagnosticRecord {
                    stage: DiagnosticStage::Validate,
                    field,
                    index: Some(index),
                    value: Some(value),
                    reason,
                    detail: violation_error(field, index, value, bounds, reason).to_string(),
                });
            }
        }
    }
    Ok(kept)
}

fn violation_error(
    field: &'static str,
    index: usize,
    value: f64,
    bounds: Option<(f64, f64)>,
    reason: DiagnosticReason,
) -> SensesError {
    match (reason, bounds) {
        (DiagnosticReason::OutOfRange, Some((min, max))) => SensesError::OutOfRange {
            field,
            index,
            value,
            min,
            max,
        },
        _ => SensesError::NonFinite { field, index },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
