/// Incremental mean; stays finite for finite inputs near `f64::MAX`.
pub fn running_mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut mean = 0f64;
    let mut count = 0usize;
    for v in values {
        count += 1;
        let n = count as f64;
        mean += v / n - mean / n;
    }
    if count == 0 { None } else { Some(mean) }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    running_mean(values.iter().copied())
}

pub fn mean_abs(values: &[f64]) -> Option<f64> {
    running_mean(values.iter().map(|v| v.abs()))
}

pub fn max_abs(values: &[f64]) -> f64 {
    let mut max = 0f64;
    for &v in values {
        let a = v.abs();
        if a > max {
            max = a;
        }
    }
    max
}

/// Sum of squared deviations from `center` (two-pass form).
pub fn sum_sq_dev(values: &[f64], center: f64) -> f64 {
    let mut m2 = 0f64;
    for &v in values {
        let d = v - center;
        m2 += d * d;
    }
    m2
}

/// Sample standard deviation (n - 1 denominator), `None` below two values.
pub fn sample_sd(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mu = mean(values)?;
    Some((sum_sq_dev(values, mu) / (values.len() - 1) as f64).sqrt())
}

pub fn all_identical(values: &[f64]) -> bool {
    match values.first() {
        Some(&first) => values.iter().all(|&v| v == first),
        None => true,
    }
}

pub fn true_fraction(values: &[bool]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let count = values.iter().filter(|&&v| v).count();
    Some(count as f64 / values.len() as f64)
}

#[cfg(test)]
#[path = "../tests/src_inline/stats.rs"]
mod tests;
