use thiserror::Error;

use crate::model::scores::Dimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Structural,
    Range,
    Config,
    Internal,
    Input,
}

#[derive(Debug, Error)]
pub enum SensesError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid type for {field}: expected {expected}, found {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("{field}[{index}] = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field}[{index}] is not a finite number")]
    NonFinite { field: &'static str, index: usize },

    #[error("input sequences differ in length: {lengths}")]
    LengthMismatch { lengths: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("internal error in {stage} stage{}: {detail}", dimension_suffix(.dimension))]
    Internal {
        stage: &'static str,
        dimension: Option<Dimension>,
        detail: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn dimension_suffix(dimension: &Option<Dimension>) -> String {
    match dimension {
        Some(d) => format!(" ({})", d.key()),
        None => String::new(),
    }
}

impl SensesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SensesError::MissingField { .. }
            | SensesError::InvalidType { .. }
            | SensesError::LengthMismatch { .. } => ErrorKind::Structural,
            SensesError::OutOfRange { .. } | SensesError::NonFinite { .. } => ErrorKind::Range,
            SensesError::InvalidConfig(_) => ErrorKind::Config,
            SensesError::Internal { .. } => ErrorKind::Internal,
            SensesError::Io(_) | SensesError::Json(_) => ErrorKind::Input,
        }
    }

    /// Input field the error refers to, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SensesError::MissingField { field }
            | SensesError::InvalidType { field, .. }
            | SensesError::OutOfRange { field, .. }
            | SensesError::NonFinite { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/error.rs"]
mod tests;
