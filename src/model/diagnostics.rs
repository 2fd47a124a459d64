use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticStage {
    Validate,
    Outliers,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticReason {
    OutOfRange,
    NonFinite,
    Outlier,
    EmptyInput,
}

/// One value the pipeline discarded, or one dimension that fell back to the
/// neutral default (`index` and `value` are `None` then).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticRecord {
    pub stage: DiagnosticStage,
    pub field: &'static str,
    pub index: Option<usize>,
    pub value: Option<f64>,
    pub reason: DiagnosticReason,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    pub records: Vec<DiagnosticRecord>,
}

impl Diagnostics {
    pub fn push(&mut self, record: DiagnosticRecord) {
        self.records.push(record);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.records.extend(other.records);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn count(&self, reason: DiagnosticReason) -> usize {
        self.records.iter().filter(|r| r.reason == reason).count()
    }

    #[cfg(test)]
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a DiagnosticRecord> + 'a {
        self.records.iter().filter(move |r| r.field == field)
    }
}
