use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::compute_senses;
use crate::model::config::RangePolicy;
use crate::model::ratings::RatingsInput;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("senses_qc_report_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn outcome(config: &SensesConfig) -> SensesOutcome {
    let input = RatingsInput {
        coherence_ratings: vec![0.8, 0.9, 1.7],
        structural_feedback: vec![0.85, 0.75, 0.9],
        novelty_indicators: vec![0.1, 0.2, 0.15, 1000.0],
        application_successes: vec![],
        likability_scores: vec![4.5, 5.0, 3.8],
        custom_metric: None,
    };
    compute_senses(&input, config).unwrap()
}

fn drop_config() -> SensesConfig {
    SensesConfig {
        range_policy: RangePolicy::Drop,
        ..SensesConfig::default()
    }
}

#[test]
fn test_format_score() {
    assert_eq!(format_score(0.5, 2), "0.50");
    assert_eq!(format_score(0.74278, 3), "0.743");
}

#[test]
fn test_summary_json_contents() {
    let config = drop_config();
    let out = outcome(&config);
    let json = render_summary_json(&out, &config).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["tool"]["name"], "senses-qc");
    assert_eq!(v["config"]["range_policy"], "drop");
    assert_eq!(v["config"]["outlier_rule"], "leave-one-out");
    assert_eq!(v["scores"]["hear"], 0.85);
    assert_eq!(v["diagnostics"]["dropped_out_of_range"], 1);
    assert_eq!(v["diagnostics"]["outliers_rejected"], 1);
    assert_eq!(v["diagnostics"]["empty_dimensions"], 1);
    assert_eq!(v["diagnostics"]["records"].as_array().unwrap().len(), 3);
    assert_eq!(v["diagnostics"]["records"][1]["reason"], "outlier");
}

#[test]
fn test_text_report_sections() {
    let config = drop_config();
    let text = render_report_text(&outcome(&config), &config);
    assert!(text.starts_with("SENSES (HSSTT) Quality Report\n"));
    assert!(text.contains("Hear (coherence)"));
    assert!(text.contains("Novelty outliers rejected: 1"));
    assert!(text.contains("Empty inputs (scored as neutral): application_successes"));
    assert!(!text.contains("Overall:"));
}

#[test]
fn test_write_reports() {
    let dir = make_temp_dir();
    let config = drop_config();
    let out = outcome(&config);
    write_reports(&out, &config, &dir).unwrap();
    let compact = std::fs::read_to_string(dir.join("senses.json")).unwrap();
    assert_eq!(compact.trim_end(), out.report);
    assert!(dir.join("summary.json").exists());
    assert!(dir.join("report.txt").exists());
}
