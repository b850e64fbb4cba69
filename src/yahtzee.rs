//! Yahtzee sort
//!
//! Keep the best "roll": peel the longest strictly increasing run off the
//! remainder, merge it into the sorted accumulator, optionally reshuffle what
//! is left, and roll again until nothing remains.

use crate::bench::is_sorted;
use crate::error::Result;
use crate::merge::merge;
use crate::partition::split_run;
use crate::rng::RandomSource;
use crate::run::{find_longest_run, Run};
use crate::shuffle::shuffle;
use crate::Sorter;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Runs shorter than this trigger a reshuffle of the remainder
pub const DEFAULT_MIN_RUN_THRESHOLD: usize = 4;

/// When to reshuffle the remainder between passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReshufflePolicy {
    /// Reshuffle after a short run or once the remainder gets small
    #[default]
    Threshold,
    /// Reshuffle after every pass
    Always,
    /// Never reshuffle; plain run peeling
    Never,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YahtzeeConfig {
    pub min_run_threshold: usize,
    pub policy: ReshufflePolicy,
}

impl Default for YahtzeeConfig {
    fn default() -> Self {
        Self {
            min_run_threshold: DEFAULT_MIN_RUN_THRESHOLD,
            policy: ReshufflePolicy::Threshold,
        }
    }
}

impl YahtzeeConfig {
    /// Decide whether the remainder left after extracting a run of
    /// `run_len` elements gets shuffled.
    ///
    /// Under [`ReshufflePolicy::Threshold`] that happens when the run was
    /// shorter than `min_run_threshold` or fewer than three thresholds' worth
    /// of elements remain.
    pub fn should_reshuffle(&self, run_len: usize, remainder_len: usize) -> bool {
        match self.policy {
            ReshufflePolicy::Threshold => {
                run_len < self.min_run_threshold
                    || remainder_len < self.min_run_threshold.saturating_mul(3)
            }
            ReshufflePolicy::Always => true,
            ReshufflePolicy::Never => false,
        }
    }
}

/// One iteration of the sorting loop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Pass {
    /// The run as found in the remainder at the start of the pass
    pub run: Run,
    /// Elements left after the run was removed
    pub remainder_len: usize,
    pub reshuffled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct YahtzeeOutcome {
    pub sorted: Vec<i32>,
    pub passes: Vec<Pass>,
}

/// Sort `data` by repeated run extraction.
pub fn yahtzee_sort<R: RngCore>(
    data: Vec<i32>,
    config: &YahtzeeConfig,
    rng: &mut RandomSource<R>,
) -> Result<Vec<i32>> {
    roll(data, config, rng, |_| {})
}

/// Like [`yahtzee_sort`], but also records every pass.
pub fn yahtzee_sort_traced<R: RngCore>(
    data: Vec<i32>,
    config: &YahtzeeConfig,
    rng: &mut RandomSource<R>,
) -> Result<YahtzeeOutcome> {
    let mut passes = Vec::new();
    let sorted = roll(data, config, rng, |pass| passes.push(pass))?;
    Ok(YahtzeeOutcome { sorted, passes })
}

fn roll<R, F>(
    data: Vec<i32>,
    config: &YahtzeeConfig,
    rng: &mut RandomSource<R>,
    mut on_pass: F,
) -> Result<Vec<i32>>
where
    R: RngCore,
    F: FnMut(Pass),
{
    let total = data.len();
    let mut result: Vec<i32> = Vec::new();
    let mut remaining = data;
    let mut pass_no = 0usize;

    while !remaining.is_empty() {
        let run = find_longest_run(&remaining)?;
        let (payload, mut rest) = split_run(remaining, run)?;

        let reshuffled = config.should_reshuffle(run.len, rest.len());
        if reshuffled {
            shuffle(&mut rest, rng);
        }

        result = merge(&result, &payload);
        remaining = rest;
        pass_no += 1;

        debug_assert_eq!(result.len() + remaining.len(), total);
        debug_assert!(is_sorted(&result));
        debug!(
            pass = pass_no,
            start = run.start,
            len = run.len,
            remaining = remaining.len(),
            reshuffled,
            "extracted run"
        );

        on_pass(Pass {
            run,
            remainder_len: remaining.len(),
            reshuffled,
        });
    }

    debug!(passes = pass_no, len = total, "yahtzee sort finished");
    Ok(result)
}

/// [`Sorter`] adapter that replays the same seed on every call.
///
/// `sort` cannot fail: the loop only looks for a run while the remainder is
/// non-empty, and the run it finds always lies inside that remainder, so
/// neither [`SortError`](crate::SortError) variant can come back from
/// [`yahtzee_sort`].
#[derive(Clone, Copy, Debug)]
pub struct YahtzeeSorter {
    seed: u64,
    config: YahtzeeConfig,
}

impl YahtzeeSorter {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            config: YahtzeeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: YahtzeeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &YahtzeeConfig {
        &self.config
    }
}

impl Sorter for YahtzeeSorter {
    fn name(&self) -> &'static str {
        "yahtzee"
    }

    fn sort(&self, data: &mut [i32]) {
        let mut rng = RandomSource::seed_from_u64(self.seed);
        match yahtzee_sort(data.to_vec(), &self.config, &mut rng) {
            Ok(sorted) => data.copy_from_slice(&sorted),
            // Runs only come from non-empty remainders and always fit them
            Err(err) => unreachable!("run extraction failed: {err}"),
        }
    }
}
