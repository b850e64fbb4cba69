//! Yahtzee Sort
//!
//! Sorts by keeping the best roll: repeatedly pull the longest strictly
//! increasing run out of the unsorted remainder, merge it into the result,
//! reshuffle, and roll again. Quicksort, mergesort and bubble sort are
//! included as timing baselines.

pub mod baselines;
pub mod bench;
pub mod cli;
pub mod error;
pub mod merge;
pub mod partition;
pub mod rng;
pub mod run;
pub mod shuffle;
pub mod yahtzee;

pub use error::SortError;
pub use rng::RandomSource;
pub use run::{find_longest_run, Run};
pub use yahtzee::{yahtzee_sort, YahtzeeConfig, YahtzeeSorter};

/// Trait for sorting implementations
pub trait Sorter {
    /// Short identifier used in reports
    fn name(&self) -> &'static str;

    /// Sort the slice in-place in ascending order
    fn sort(&self, data: &mut [i32]);
}
