use super::config::{OutlierRule, RangePolicy, SensesConfig, SmellNormalization};
use super::diagnostics::{DiagnosticReason, DiagnosticRecord, DiagnosticStage, Diagnostics};
use super::scores::{Dimension, DimensionScores, clip01, round_to};
use crate::error::ErrorKind;

#[test]
fn test_default_config() {
    let config = SensesConfig::default();
    assert_eq!(config.z_threshold, 3.0);
    assert_eq!(config.outlier_rule, OutlierRule::LeaveOneOut);
    assert_eq!(config.smell, SmellNormalization::PeakRatio);
    assert_eq!(config.range_policy, RangePolicy::Strict);
    assert_eq!(config.precision, 2);
    assert!(!config.require_equal_lengths);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_rejects_non_positive_threshold() {
    for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = SensesConfig::with_z_threshold(t).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
    assert!(SensesConfig::with_z_threshold(0.5).validate().is_ok());
}

#[test]
fn test_config_rejects_excessive_precision() {
    let config = SensesConfig {
        precision: 11,
        ..SensesConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_clip01() {
    assert_eq!(clip01(-0.1), 0.0);
    assert_eq!(clip01(1.0000001), 1.0);
    assert_eq!(clip01(0.42), 0.42);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(0.8333333, 2), 0.83);
    assert_eq!(round_to(0.9375, 2), 0.94);
    assert_eq!(round_to(0.85833, 2), 0.86);
    assert_eq!(round_to(0.5, 0), 1.0);
    assert_eq!(round_to(0.123456, 4), 0.1235);
    // Exact binary ties round away from zero, not to even.
    assert_eq!(round_to(0.125, 2), 0.13);
    assert_eq!(round_to(-0.125, 2), -0.13);
}

#[test]
fn test_dimension_scores_serialize_in_fixed_order() {
    let scores = DimensionScores {
        hear: 0.1,
        see: 0.2,
        smell: 0.3,
        touch: 0.4,
        taste: 0.5,
    };
    let json = serde_json::to_string(&scores).unwrap();
    assert_eq!(
        json,
        r#"{"hear":0.1,"see":0.2,"smell":0.3,"touch":0.4,"taste":0.5}"#
    );
    let keys: Vec<&str> = Dimension::ALL.iter().map(|d| d.key()).collect();
    assert_eq!(keys, ["hear", "see", "smell", "touch", "taste"]);
    for d in Dimension::ALL {
        assert!(scores.get(d) > 0.0);
    }
}

#[test]
fn test_diagnostics_counts() {
    let mut d = Diagnostics::default();
    assert!(d.is_empty());
    d.push(DiagnosticRecord {
        stage: DiagnosticStage::Outliers,
        field: "novelty_indicators",
        index: Some(3),
        value: Some(1000.0),
        reason: DiagnosticReason::Outlier,
        detail: String::new(),
    });
    d.push(DiagnosticRecord {
        stage: DiagnosticStage::Score,
        field: "application_successes",
        index: None,
        value: None,
        reason: DiagnosticReason::EmptyInput,
        detail: String::new(),
    });
    assert_eq!(d.len(), 2);
    assert_eq!(d.count(DiagnosticReason::Outlier), 1);
    assert_eq!(d.count(DiagnosticReason::OutOfRange), 0);
    assert_eq!(d.for_field("novelty_indicators").count(), 1);
}
