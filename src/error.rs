use thiserror::Error;

/// Precondition failures of the run-peeling primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A run was requested from a sequence with no elements.
    #[error("cannot find a run in an empty sequence")]
    EmptySequence,

    /// A run descriptor does not fit inside the sequence it was applied to.
    #[error("run of length {len} at index {start} does not fit in a sequence of length {sequence_len}")]
    RunOutOfBounds {
        start: usize,
        len: usize,
        sequence_len: usize,
    },
}

pub type Result<T> = std::result::Result<T, SortError>;
