//! Wall-clock comparison of Yahtzee sort against the baselines
//!
//! Every competitor sorts its own clone of one seeded input, one after the
//! other, so timings are uncontended.

use crate::baselines::{BubbleSort, MergeSort, QuickSort};
use crate::rng::{random_sequence, RandomSource};
use crate::yahtzee::{YahtzeeConfig, YahtzeeSorter};
use crate::Sorter;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Serialize, Clone, Debug)]
pub struct BenchmarkResult {
    pub name: String,
    pub elapsed_secs: f64,
    pub correct: bool,
}

#[derive(Serialize, Clone, Debug)]
pub struct Comparison {
    pub size: usize,
    pub seed: u64,
    pub config: YahtzeeConfig,
    pub results: Vec<BenchmarkResult>,
    pub correctness: bool,
}

impl Comparison {
    /// Elapsed seconds per competitor, comma separated, in report order
    pub fn csv_row(&self) -> String {
        self.results
            .iter()
            .map(|r| format!("{:.6}", r.elapsed_secs))
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Competitors in report order: yahtzee, mergesort, bubble, quicksort.
pub fn competitors(yahtzee_seed: u64, config: YahtzeeConfig) -> Vec<Box<dyn Sorter>> {
    vec![
        Box::new(YahtzeeSorter::new(yahtzee_seed).with_config(config)),
        Box::new(MergeSort),
        Box::new(BubbleSort),
        Box::new(QuickSort),
    ]
}

/// Sort a private copy of `input` and time it.
pub fn time_sorter(sorter: &dyn Sorter, input: &[i32]) -> BenchmarkResult {
    let mut data = input.to_vec();

    let start = Instant::now();
    sorter.sort(std::hint::black_box(&mut data));
    let elapsed: Duration = start.elapsed();

    let correct = is_sorted(&data);
    if correct {
        info!(sorter = sorter.name(), len = input.len(), elapsed = ?elapsed, "sorted");
    } else {
        warn!(sorter = sorter.name(), len = input.len(), "output is not sorted");
    }

    BenchmarkResult {
        name: sorter.name().to_string(),
        elapsed_secs: elapsed.as_secs_f64(),
        correct,
    }
}

/// Generate `size` values from `seed` and race every competitor on them.
pub fn compare(size: usize, seed: u64, config: YahtzeeConfig) -> Comparison {
    let mut rng = RandomSource::seed_from_u64(seed);
    let input = random_sequence(size, &mut rng);
    let yahtzee_seed = rng.rand_int(0, u64::MAX);

    let results: Vec<BenchmarkResult> = competitors(yahtzee_seed, config)
        .iter()
        .map(|sorter| time_sorter(sorter.as_ref(), &input))
        .collect();
    let correctness = results.iter().all(|r| r.correct);

    Comparison {
        size,
        seed,
        config,
        results,
        correctness,
    }
}

/// Sizes `from, from + step, ...` up to and including `to`.
pub fn sweep_sizes(from: usize, to: usize, step: usize) -> impl Iterator<Item = usize> {
    (from..=to).step_by(step.max(1))
}
