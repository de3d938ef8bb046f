use super::*;
use crate::matcher::{MatchConfig, Matcher};
use crate::peak::{PeakRecord, PeakRecordBuilder, Source};
use crate::stats::StatisticsEngine;

fn record(source: Source, sample: &str, rt: f64, intensity: f64) -> PeakRecord {
    PeakRecordBuilder::new(source)
        .sample(sample)
        .scope("2", "citrate")
        .rt(rt)
        .mz(191.02)
        .intensity(intensity)
        .build()
        .unwrap()
}

fn assemble(manual: &[PeakRecord], automated: &[PeakRecord]) -> ComparisonResult {
    let matcher = Matcher::new(MatchConfig::default()).unwrap();
    let outcome = matcher.match_peaks(manual, automated);
    let stats = StatisticsEngine::new().compute(&outcome.pairs);
    ReportAssembler::default().assemble(ScopeKey::new("2", "citrate"), matcher.config().strategy, outcome, stats)
}

#[test]
fn test_rows_follow_pairs() {
    let manual = vec![record(Source::Manual, "testsample_1", 1.0, 1000.0)];
    let automated = vec![record(Source::Automated, "testsample_1", 1.01, 2000.0)];

    let result = assemble(&manual, &automated);

    assert_eq!(result.rows.len(), 1);
    let row = &result.rows[0];
    assert_eq!(row.sample_name, "testsample_1");
    assert_eq!(row.automated_sample_name, "testsample_1");
    assert_eq!(row.group_id, "2");
    assert_eq!(row.unique_identifier_man, "citrate@testsample_1");
    assert_eq!(row.log_fold_change, Some(1.0));
    assert_eq!(
        row.hover_text,
        "Sample Name : testsample_1 <br>Manual Intensity : 1000 <br>Automated Intensity : 2000"
    );
}

#[test]
fn test_skipped_pairs_have_no_fold_change() {
    let manual = vec![
        record(Source::Manual, "s1", 1.0, 0.0),
        record(Source::Manual, "s2", 2.0, 100.0),
    ];
    let automated = vec![
        record(Source::Automated, "s1", 1.0, 50.0),
        record(Source::Automated, "s2", 2.0, 400.0),
    ];

    let result = assemble(&manual, &automated);

    assert_eq!(result.rows[0].log_fold_change, None);
    assert_eq!(result.rows[1].log_fold_change, Some(2.0));
}

#[test]
fn test_rows_pair_within_sample() {
    let manual = vec![
        record(Source::Manual, "testsample_1", 1.000, 1000.0),
        record(Source::Manual, "testsample_2", 1.010, 3000.0),
    ];
    let automated = vec![
        record(Source::Automated, "testsample_1", 1.012, 1100.0),
        record(Source::Automated, "testsample_2", 1.001, 3300.0),
    ];

    let result = assemble(&manual, &automated);

    assert_eq!(result.rows.len(), 2);
    for row in &result.rows {
        assert_eq!(row.sample_name, row.automated_sample_name);
        assert_eq!(row.unique_identifier_man, row.unique_identifier_auto);
    }
}

#[test]
fn test_default_labels() {
    let labels = ReportLabels::default();
    assert_eq!(labels.correlation_title, "Manual vs Automated");
    assert_eq!(labels.wilcoxon_title, "Wilcox Plot");
    assert_eq!(labels.wilcoxon_y_title, "-Log10(P-val)");
}

#[test]
fn test_batch_report_display_and_json() {
    let manual = vec![record(Source::Manual, "s1", 1.0, 1000.0)];
    let result = assemble(&manual, &[]);

    let mut report = BatchReport::new(MatchConfig::default());
    report.results.push(result);
    report.failures.push(ScopeFailure {
        scope: ScopeKey::new("3", "malate"),
        error: "No automated peaks to match".to_string(),
    });

    let text = report.to_string();
    assert!(text.contains("2/citrate"));
    assert!(text.contains("r=NA"));
    assert!(text.contains("FAILED: No automated peaks to match"));
    assert!(text.contains("1 scopes, 0 pairs, 1 residues, 1 failed"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert!(json["results"][0]["statistics"]["correlation_coefficient"].is_null());
    assert_eq!(json["results"][0]["empty_side"], "automated");
    assert_eq!(json["config"]["strategy"], "by-delta-rt-and-mz");
}
