use clap::ValueEnum;
use serde::Serialize;

use crate::error::SensesError;

pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;
pub const DEFAULT_PRECISION: u32 = 2;
pub const MAX_PRECISION: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutlierRule {
    /// Each value is standardized against the mean and sample SD of the other values.
    #[default]
    LeaveOneOut,
    /// Each value is standardized against the mean and sample SD of the whole sequence.
    Pooled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SmellNormalization {
    /// mean(|x|) / max(|x|)
    #[default]
    PeakRatio,
    /// m / (1 + m), m = mean(|x|)
    Saturating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RangePolicy {
    /// Out-of-range or non-finite values fail the call.
    #[default]
    Strict,
    /// Out-of-range or non-finite values are dropped and reported in diagnostics.
    Drop,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensesConfig {
    pub z_threshold: f64,
    pub outlier_rule: OutlierRule,
    pub smell: SmellNormalization,
    pub range_policy: RangePolicy,
    pub precision: u32,
    pub require_equal_lengths: bool,
}

impl Default for SensesConfig {
    fn default() -> Self {
        Self {
            z_threshold: DEFAULT_Z_THRESHOLD,
            outlier_rule: OutlierRule::default(),
            smell: SmellNormalization::default(),
            range_policy: RangePolicy::default(),
            precision: DEFAULT_PRECISION,
            require_equal_lengths: false,
        }
    }
}

impl SensesConfig {
    pub fn with_z_threshold(z_threshold: f64) -> Self {
        Self {
            z_threshold,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SensesError> {
        if !self.z_threshold.is_finite() || self.z_threshold <= 0.0 {
            return Err(SensesError::InvalidConfig(format!(
                "z_threshold must be a positive finite number, got {}",
                self.z_threshold
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(SensesError::InvalidConfig(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}
