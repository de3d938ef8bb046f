#![no_main]

use libfuzzer_sys::fuzz_target;
use mzcompare::matcher::{MatchConfig, MatchStrategy, Matcher};
use mzcompare::peak::{PeakTable, Source};
use mzcompare::stats::StatisticsEngine;

fuzz_target!(|data: &[u8]| {
    // Loading arbitrary bytes may fail, but must never panic
    let Ok(table) = PeakTable::from_reader(data, Source::Manual, b',') else {
        return;
    };

    // Whatever survives validation must also survive matching against itself
    for strategy in MatchStrategy::ALL {
        if let Ok(matcher) = Matcher::new(MatchConfig::with_strategy(strategy)) {
            let outcome = matcher.match_peaks(&table.records, &table.records);
            let _ = StatisticsEngine::new().compute(&outcome.pairs);
        }
    }
});
