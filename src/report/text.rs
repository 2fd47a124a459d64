use crate::model::config::SensesConfig;
use crate::model::diagnostics::DiagnosticReason;
use crate::model::scores::Dimension;
use crate::pipeline::SensesOutcome;
use crate::report::format_score;

pub fn render_report_text(outcome: &SensesOutcome, config: &SensesConfig) -> String {
    let p = config.precision;
    let mut out = String::new();

    out.push_str("SENSES (HSSTT) Quality Report\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Dimension scores\n");
    for dimension in Dimension::ALL {
        out.push_str(&format!(
            "{:<30} {}\n",
            dimension.label(),
            format_score(outcome.rounded.get(dimension), p)
        ));
    }
    out.push('\n');

    out.push_str("2. Composite\n");
    out.push_str(&format!(
        "Composite score: {}\n",
        format_score(outcome.composite, p.max(3))
    ));
    out.push('\n');

    out.push_str("3. Settings\n");
    out.push_str(&format!("Z threshold: {}\n", config.z_threshold));
    out.push_str(&format!("Outlier rule: {:?}\n", config.outlier_rule));
    out.push_str(&format!("Smell normalization: {:?}\n", config.smell));
    out.push_str(&format!("Range policy: {:?}\n\n", config.range_policy));

    out.push_str("4. Data handling\n");
    let d = &outcome.diagnostics;
    out.push_str(&format!(
        "Dropped out-of-range values: {}\n",
        d.count(DiagnosticReason::OutOfRange)
    ));
    out.push_str(&format!(
        "Dropped non-finite values: {}\n",
        d.count(DiagnosticReason::NonFinite)
    ));
    out.push_str(&format!(
        "Novelty outliers rejected: {}\n",
        d.count(DiagnosticReason::Outlier)
    ));
    let empty: Vec<&str> = d
        .records
        .iter()
        .filter(|r| r.reason == DiagnosticReason::EmptyInput)
        .map(|r| r.field)
        .collect();
    if empty.is_empty() {
        out.push_str("Empty inputs: none\n");
    } else {
        out.push_str(&format!(
            "Empty inputs (scored as neutral): {}\n",
            empty.join(", ")
        ));
    }

    out
}
