use super::*;

#[test]
fn test_mean_and_empty() {
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    assert_eq!(mean(&[]), None);
    assert!((mean_abs(&[-1.0, 1.0, -4.0]).unwrap() - 2.0).abs() < 1e-12);
    assert_eq!(mean_abs(&[]), None);
}

#[test]
fn test_running_mean_near_float_max() {
    let m = running_mean([f64::MAX, f64::MAX, f64::MAX]).unwrap();
    assert!(m.is_finite());
    assert!((m / f64::MAX - 1.0).abs() < 1e-12);
    assert_eq!(running_mean([1.5e308, -1.5e308]), Some(0.0));
    assert!(mean_abs(&[1e308, 1.5e308, 1.2e308]).unwrap().is_finite());
    assert_eq!(running_mean(std::iter::empty()), None);
}

#[test]
fn test_max_abs() {
    assert_eq!(max_abs(&[1.0, -3.0, 2.0]), 3.0);
    assert_eq!(max_abs(&[]), 0.0);
}

#[test]
fn test_sample_sd() {
    let sd = sample_sd(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    assert!((sd - 2.138089935299395).abs() < 1e-12);
    assert_eq!(sample_sd(&[1.0]), None);
    assert_eq!(sample_sd(&[3.0, 3.0]), Some(0.0));
}

#[test]
fn test_all_identical() {
    assert!(all_identical(&[]));
    assert!(all_identical(&[0.5, 0.5]));
    assert!(!all_identical(&[0.5, 0.6]));
}

#[test]
fn test_true_fraction() {
    assert_eq!(true_fraction(&[true, false, true, true]), Some(0.75));
    assert_eq!(true_fraction(&[]), None);
}
