//! Property-based tests for the matcher and statistics engine

use std::collections::BTreeSet;

use mzcompare::matcher::{MatchConfidence, MatchConfig, MatchStrategy, MatchedPair, Matcher};
use mzcompare::peak::{PeakRecord, PeakRecordBuilder, Source};
use mzcompare::stats::{pearson, StatisticsEngine};
use proptest::prelude::*;

const SAMPLES: usize = 3;

/// Records spread round-robin over a few samples shared by both curations
fn records(source: Source, points: &[(f64, f64, f64)]) -> Vec<PeakRecord> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(rt, mz, intensity))| {
            PeakRecordBuilder::new(source)
                .sample(format!("testsample_{}", i % SAMPLES))
                .scope("1", "citrate")
                .rt(rt)
                .mz(mz)
                .intensity(intensity)
                .build()
                .unwrap()
        })
        .collect()
}

fn point() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.0f64..10.0, 100.0f64..100.5, 1.0f64..1e6)
}

fn strategy() -> impl Strategy<Value = MatchStrategy> {
    prop::sample::select(MatchStrategy::ALL.to_vec())
}

proptest! {
    /// Strategy 1 never pairs peaks outside the tolerance windows
    #[test]
    fn test_pairs_respect_tolerance(
        manual in prop::collection::vec(point(), 1..30),
        automated in prop::collection::vec(point(), 1..30),
        max_rt in 0.01f64..2.0,
        max_mz in 0.001f64..0.2,
    ) {
        let config = MatchConfig::with_strategy(MatchStrategy::ByDeltaRtAndMz).tolerances(max_rt, max_mz);
        let matcher = Matcher::new(config).unwrap();
        let outcome = matcher.match_peaks(&records(Source::Manual, &manual), &records(Source::Automated, &automated));

        for pair in &outcome.pairs {
            prop_assert!(pair.delta_rt.abs() <= max_rt * (1.0 + 1e-9));
            prop_assert!(pair.delta_mz.abs() <= max_mz * (1.0 + 1e-9));
            prop_assert_eq!(pair.confidence, MatchConfidence::WithinTolerance);
        }
    }

    /// No automated record is used twice, pairs stay within one sample and
    /// every record is accounted for
    #[test]
    fn test_matching_is_one_to_one(
        manual in prop::collection::vec(point(), 0..30),
        automated in prop::collection::vec(point(), 0..30),
        strategy in strategy(),
        n_closest in 1usize..5,
    ) {
        let config = MatchConfig::with_strategy(strategy).tolerances(0.5, 0.05).n_closest(n_closest);
        let matcher = Matcher::new(config).unwrap();
        let automated_records = records(Source::Automated, &automated);
        let outcome = matcher.match_peaks(&records(Source::Manual, &manual), &automated_records);

        let mut unused = automated_records.clone();
        for pair in &outcome.pairs {
            prop_assert_eq!(pair.manual.sample_name(), pair.automated.sample_name());
            let position = unused.iter().position(|r| *r == pair.automated);
            prop_assert!(position.is_some());
            if let Some(position) = position {
                unused.swap_remove(position);
            }
        }
        prop_assert_eq!(outcome.pairs.len() + outcome.unmatched_manual.len(), manual.len());
        prop_assert_eq!(outcome.pairs.len() + outcome.unmatched_automated.len(), automated.len());
    }

    /// Identical peak lists pair up completely under every strategy
    #[test]
    fn test_coinciding_peaks_fully_match(
        grid in prop::collection::btree_set((0u32..1000, 0u32..1000), 1..30),
        intensity in 1.0f64..1e6,
        strategy in strategy(),
    ) {
        let grid: BTreeSet<(u32, u32)> = grid;
        let points: Vec<(f64, f64, f64)> = grid
            .iter()
            .map(|&(rt, mz)| (rt as f64 * 0.01, 100.0 + mz as f64 * 0.001, intensity))
            .collect();

        let matcher = Matcher::new(MatchConfig::with_strategy(strategy)).unwrap();
        let outcome = matcher.match_peaks(&records(Source::Manual, &points), &records(Source::Automated, &points));

        prop_assert_eq!(outcome.pairs.len(), points.len());
        prop_assert_eq!(outcome.residue_count(), 0);
        for pair in &outcome.pairs {
            prop_assert_eq!(pair.delta_rt, 0.0);
            prop_assert_eq!(pair.delta_mz, 0.0);
        }
    }

    /// Pearson correlation does not depend on which series is x
    #[test]
    fn test_pearson_symmetry(
        values in prop::collection::vec((1.0f64..1e6, 1.0f64..1e6), 2..50),
    ) {
        let x: Vec<f64> = values.iter().map(|v| v.0.ln()).collect();
        let y: Vec<f64> = values.iter().map(|v| v.1.ln()).collect();

        match (pearson(&x, &y), pearson(&y, &x)) {
            (Some(xy), Some(yx)) => {
                prop_assert!((xy - yx).abs() < 1e-12);
                prop_assert!((-1.0..=1.0).contains(&xy));
            }
            (None, None) => {}
            (a, b) => prop_assert!(false, "asymmetric result: {:?} vs {:?}", a, b),
        }
    }

    /// Identical intensities on both sides give a Wilcoxon p-value of 1
    #[test]
    fn test_identical_intensities_p_value_one(
        intensities in prop::collection::vec(1.0f64..1e6, 1..60),
    ) {
        let points: Vec<(f64, f64, f64)> = intensities.iter().map(|&i| (1.0, 100.0, i)).collect();
        let manual = records(Source::Manual, &points);
        let automated = records(Source::Automated, &points);
        let pairs: Vec<MatchedPair> = manual
            .into_iter()
            .zip(automated)
            .map(|(manual, automated)| MatchedPair {
                manual,
                automated,
                delta_rt: 0.0,
                delta_mz: 0.0,
                distance: 0.0,
                confidence: MatchConfidence::WithinTolerance,
            })
            .collect();

        let stats = StatisticsEngine::new().compute(&pairs);
        prop_assert_eq!(stats.p_value, 1.0);
        prop_assert_eq!(stats.pairs_used, intensities.len());
        for lfc in &stats.log_fold_changes {
            prop_assert_eq!(*lfc, 0.0);
        }
    }
}
