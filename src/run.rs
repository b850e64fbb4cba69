//! Longest strictly-increasing run detection

use crate::error::{Result, SortError};
use serde::Serialize;
use std::ops::Range;

/// A strictly increasing span `[start, start + len)` of some sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last index of the run
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Check that the run fits in a sequence of `sequence_len` elements
    pub fn check_bounds(&self, sequence_len: usize) -> Result<()> {
        let fits = self
            .start
            .checked_add(self.len)
            .is_some_and(|end| end <= sequence_len);
        if self.len == 0 || !fits {
            return Err(SortError::RunOutOfBounds {
                start: self.start,
                len: self.len,
                sequence_len,
            });
        }
        Ok(())
    }

    /// Copy the run's elements out of `data`.
    ///
    /// The copy is owned, so it is unaffected by whatever later happens to
    /// `data`.
    pub fn elements(&self, data: &[i32]) -> Result<Vec<i32>> {
        self.check_bounds(data.len())?;
        Ok(data[self.range()].to_vec())
    }
}

/// Find the longest strictly increasing contiguous run.
///
/// Equal neighbours end a run. When several runs share the maximum length
/// the one with the lowest start index is returned.
pub fn find_longest_run(data: &[i32]) -> Result<Run> {
    if data.is_empty() {
        return Err(SortError::EmptySequence);
    }

    let mut best = Run::new(0, 1);
    let mut start = 0;

    for i in 1..data.len() {
        if data[i] <= data[i - 1] {
            if i - start > best.len {
                best = Run::new(start, i - start);
            }
            start = i;
        }
    }

    // The last run has no closing element
    if data.len() - start > best.len {
        best = Run::new(start, data.len() - start);
    }

    Ok(best)
}
