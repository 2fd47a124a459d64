use crate::model::config::OutlierRule;
use crate::model::diagnostics::{DiagnosticReason, DiagnosticRecord, DiagnosticStage, Diagnostics};
use crate::stats::{all_identical, mean, running_mean, sample_sd, sum_sq_dev};

// Smallest sample for which a leave-one-out reference SD can flag a value;
// shorter sequences use the pooled rule.
const LOO_MIN_LEN: usize = 4;
// Below this share of the pooled M2 the leave-one-out update is recomputed directly.
const LOO_CANCELLATION_RATIO: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rejection {
    pub index: usize,
    pub value: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    pub kept: Vec<f64>,
    pub rejected: Vec<Rejection>,
}

impl FilterResult {
    fn pass_through(values: &[f64]) -> Self {
        Self {
            kept: values.to_vec(),
            rejected: Vec::new(),
        }
    }

    pub fn to_diagnostics(&self, field: &'static str, z_threshold: f64) -> Diagnostics {
        let mut out = Diagnostics::default();
        for r in &self.rejected {
            out.push(DiagnosticRecord {
                stage: DiagnosticStage::Outliers,
                field,
                index: Some(r.index),
                value: Some(r.value),
                reason: DiagnosticReason::Outlier,
                detail: format!("|z| = {:.3} exceeds threshold {}", r.z.abs(), z_threshold),
            });
        }
        out
    }
}

/// Z-score outlier rejection. `z_threshold` must already be validated as positive.
///
/// Sequences with fewer than two values, or with every value identical, pass
/// through unchanged. `LeaveOneOut` on fewer than four values falls back to
/// the pooled rule. Kept values preserve input order.
pub fn filter_outliers(values: &[f64], z_threshold: f64, rule: OutlierRule) -> FilterResult {
    if values.len() < 2 || all_identical(values) {
        return FilterResult::pass_through(values);
    }

    let z_scores = match rule {
        OutlierRule::LeaveOneOut if values.len() >= LOO_MIN_LEN => leave_one_out_z_scores(values),
        _ => pooled_z_scores(values),
    };
    let Some(z_scores) = z_scores else {
        return FilterResult::pass_through(values);
    };

    let mut kept = Vec::with_capacity(values.len());
    let mut rejected = Vec::new();
    for (index, (&value, &z)) in values.iter().zip(z_scores.iter()).enumerate() {
        if z.abs() > z_threshold {
            tracing::trace!(index, value, z, "rejecting outlier");
            rejected.push(Rejection { index, value, z });
        } else {
            kept.push(value);
        }
    }

    FilterResult { kept, rejected }
}

fn pooled_z_scores(values: &[f64]) -> Option<Vec<f64>> {
    let mu = mean(values)?;
    let sd = sample_sd(values)?;
    if sd <= 0.0 || !sd.is_finite() {
        return None;
    }
    Some(values.iter().map(|&x| (x - mu) / sd).collect())
}

/// z of each value against the other n - 1 values. A value whose reference
/// values are all identical has no defined z and is scored 0 (kept).
fn leave_one_out_z_scores(values: &[f64]) -> Option<Vec<f64>> {
    let n = values.len();
    if n < LOO_MIN_LEN {
        return None;
    }
    let nf = n as f64;
    let n1 = (n - 1) as f64;
    let mu = mean(values)?;
    let m2 = sum_sq_dev(values, mu);
    if !m2.is_finite() {
        return None;
    }

    let mut out = Vec::with_capacity(n);
    for (i, &x) in values.iter().enumerate() {
        let d = x - mu;
        let mut mu_loo = mu - d / n1;
        let mut m2_loo = m2 - d * d * nf / n1;
        if m2_loo <= m2 * LOO_CANCELLATION_RATIO {
            match leave_one_out_direct(values, i) {
                Some(stats) => {
                    (mu_loo, m2_loo) = stats;
                }
                None => {
                    out.push(0.0);
                    continue;
                }
            }
        }
        let sd_loo = (m2_loo.max(0.0) / (n1 - 1.0)).sqrt();
        let z = if sd_loo > 0.0 { (x - mu_loo) / sd_loo } else { 0.0 };
        out.push(z);
    }
    Some(out)
}

/// Mean and M2 of every value but `skip`; `None` when those values are all identical.
fn leave_one_out_direct(values: &[f64], skip: usize) -> Option<(f64, f64)> {
    let others = || {
        values
            .iter()
            .enumerate()
            .filter(move |&(j, _)| j != skip)
            .map(|(_, &v)| v)
    };
    let first = others().next()?;
    if others().all(|v| v == first) {
        return None;
    }
    let mu = running_mean(others())?;
    let m2 = others().map(|v| (v - mu) * (v - mu)).sum::<f64>();
    Some((mu, m2))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_outliers.rs"]
mod tests;
