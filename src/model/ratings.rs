use serde_json::{Map, Value};

use crate::error::SensesError;

pub const COHERENCE_RATINGS: &str = "coherence_ratings";
pub const STRUCTURAL_FEEDBACK: &str = "structural_feedback";
pub const NOVELTY_INDICATORS: &str = "novelty_indicators";
pub const APPLICATION_SUCCESSES: &str = "application_successes";
pub const LIKABILITY_SCORES: &str = "likability_scores";
pub const CUSTOM_METRIC: &str = "custom_metric";

pub const REQUIRED_FIELDS: [&str; 5] = [
    COHERENCE_RATINGS,
    STRUCTURAL_FEEDBACK,
    NOVELTY_INDICATORS,
    APPLICATION_SUCCESSES,
    LIKABILITY_SCORES,
];

/// Raw ratings for one batch of evaluated responses.
///
/// Sequences are independently sized; each dimension reads only its own
/// field. `custom_metric` is carried through untouched and never scored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingsInput {
    pub coherence_ratings: Vec<f64>,
    pub structural_feedback: Vec<f64>,
    pub novelty_indicators: Vec<f64>,
    pub application_successes: Vec<bool>,
    pub likability_scores: Vec<f64>,
    pub custom_metric: Option<Value>,
}

impl RatingsInput {
    /// Builds a typed record from a decoded JSON document.
    ///
    /// Missing keys are reported in canonical field order. Unknown keys are
    /// ignored. `application_successes` accepts booleans and the numbers 0/1.
    pub fn from_json(value: &Value) -> Result<Self, SensesError> {
        let obj = value.as_object().ok_or_else(|| SensesError::InvalidType {
            field: "ratings",
            expected: "object",
            found: json_type_name(value).to_string(),
        })?;

        for field in REQUIRED_FIELDS {
            if !obj.contains_key(field) {
                return Err(SensesError::MissingField { field });
            }
        }

        Ok(Self {
            coherence_ratings: number_array(obj, COHERENCE_RATINGS)?,
            structural_feedback: number_array(obj, STRUCTURAL_FEEDBACK)?,
            novelty_indicators: number_array(obj, NOVELTY_INDICATORS)?,
            application_successes: bool_array(obj, APPLICATION_SUCCESSES)?,
            likability_scores: number_array(obj, LIKABILITY_SCORES)?,
            custom_metric: obj.get(CUSTOM_METRIC).filter(|v| !v.is_null()).cloned(),
        })
    }

    pub fn lengths(&self) -> [(&'static str, usize); 5] {
        [
            (COHERENCE_RATINGS, self.coherence_ratings.len()),
            (STRUCTURAL_FEEDBACK, self.structural_feedback.len()),
            (NOVELTY_INDICATORS, self.novelty_indicators.len()),
            (APPLICATION_SUCCESSES, self.application_successes.len()),
            (LIKABILITY_SCORES, self.likability_scores.len()),
        ]
    }
}

fn field_array<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a [Value], SensesError> {
    let value = obj
        .get(field)
        .ok_or(SensesError::MissingField { field })?;
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| SensesError::InvalidType {
            field,
            expected: "array",
            found: json_type_name(value).to_string(),
        })
}

fn number_array(obj: &Map<String, Value>, field: &'static str) -> Result<Vec<f64>, SensesError> {
    let items = field_array(obj, field)?;
    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match item.as_f64() {
            Some(v) => out.push(v),
            None => {
                return Err(SensesError::InvalidType {
                    field,
                    expected: "array of numbers",
                    found: format!("{} at index {idx}", json_type_name(item)),
                });
            }
        }
    }
    Ok(out)
}

fn bool_array(obj: &Map<String, Value>, field: &'static str) -> Result<Vec<bool>, SensesError> {
    let items = field_array(obj, field)?;
    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let flag = match item {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_f64() {
                Some(v) if v == 0.0 => Some(false),
                Some(v) if v == 1.0 => Some(true),
                _ => None,
            },
            _ => None,
        };
        match flag {
            Some(b) => out.push(b),
            None => {
                return Err(SensesError::InvalidType {
                    field,
                    expected: "array of booleans or 0/1",
                    found: format!("{item} at index {idx}"),
                });
            }
        }
    }
    Ok(out)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ratings.rs"]
mod tests;
