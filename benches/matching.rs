use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mzcompare::matcher::{MatchConfig, MatchStrategy, Matcher};
use mzcompare::peak::{PeakRecord, PeakRecordBuilder, Source};
use mzcompare::pipeline::{compare_batch, CompareConfig};
use mzcompare::stats::StatisticsEngine;

/// Create one curation with `compounds` scopes of `peaks_per_compound` peaks
fn create_peaks(source: Source, compounds: usize, peaks_per_compound: usize) -> Vec<PeakRecord> {
    let (rt_shift, intensity_scale) = match source {
        Source::Manual => (0.0, 1.0),
        Source::Automated => (0.01, 1.1),
    };
    let mut peaks = Vec::with_capacity(compounds * peaks_per_compound);
    for c in 0..compounds {
        for p in 0..peaks_per_compound {
            peaks.push(
                PeakRecordBuilder::new(source)
                    .sample(format!("sample_{}", p))
                    .scope("1", format!("compound_{}", c))
                    .rt(1.0 + c as f64 * 0.5 + p as f64 * 0.001 + rt_shift)
                    .mz(100.0 + c as f64)
                    .intensity((1000.0 + p as f64 * 10.0) * intensity_scale)
                    .build()
                    .unwrap(),
            );
        }
    }
    peaks
}

/// Benchmark the matcher on a single scope for each strategy
fn bench_match_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_strategies");

    for peaks in [50, 200, 1000] {
        let manual = create_peaks(Source::Manual, 1, peaks);
        let automated = create_peaks(Source::Automated, 1, peaks);
        group.throughput(Throughput::Elements(peaks as u64));

        for strategy in MatchStrategy::ALL {
            let matcher = Matcher::new(MatchConfig::with_strategy(strategy)).unwrap();
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), peaks),
                &(&manual, &automated),
                |b, (manual, automated)| {
                    b.iter(|| black_box(matcher.match_peaks(manual, automated)));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the statistics engine, exact vs normal-approximation Wilcoxon
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let matcher = Matcher::new(MatchConfig::default()).unwrap();

    for peaks in [20, 50, 500] {
        let outcome = matcher.match_peaks(
            &create_peaks(Source::Manual, 1, peaks),
            &create_peaks(Source::Automated, 1, peaks),
        );
        group.bench_with_input(BenchmarkId::from_parameter(peaks), &outcome.pairs, |b, pairs| {
            b.iter(|| black_box(StatisticsEngine::new().compute(pairs)));
        });
    }

    group.finish();
}

/// Benchmark a whole batch across many scopes
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);

    for compounds in [10, 100] {
        let manual = create_peaks(Source::Manual, compounds, 40);
        let automated = create_peaks(Source::Automated, compounds, 40);
        let config = CompareConfig::default();
        group.throughput(Throughput::Elements((compounds * 40) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(compounds), &compounds, |b, _| {
            b.iter(|| black_box(compare_batch(&manual, &automated, &config).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_match_strategies, bench_statistics, bench_batch);
criterion_main!(benches);
