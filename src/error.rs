//! Error types for the benchmark harness and the alignment kernels.

use crate::alignment::Score;
use crate::registry::Variant;
use thiserror::Error;

/// Failures raised by an alignment kernel while it runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A byte outside the `ACGT` alphabet reached a kernel that packs bases into 2 bits
    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// Offending byte, shown as a char
        symbol: char,
        /// Offset in the sequence
        position: usize,
    },

    /// Lane-parallel kernels need every sequence in a group to share one length
    #[error("Sequence length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Fatal harness errors. Every variant terminates the run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Identifier not in the closed variant set
    #[error("Incorrect version provided: {0}")]
    UnknownVariant(String),

    /// The corpus could not be allocated
    #[error("Failed to allocate a corpus of {pairs} pairs of length {length}")]
    Generation { pairs: usize, length: usize },

    /// The invoked kernel failed; no partial result is reported
    #[error("Variant '{variant}' failed: {source}")]
    Invocation {
        variant: Variant,
        #[source]
        source: AlignError,
    },

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// A variant disagreed with the scalar baseline in verification mode
    #[error("Variant '{variant}' failed verification. Expected {expected}, got {actual}")]
    Verification {
        variant: Variant,
        expected: Score,
        actual: Score,
    },
}
