//! # Smith-Waterman local alignment
//!
//! Every kernel computes the best local alignment score of a query against a
//! reference using a linear gap model:
//!
//! `H[i,j] = max(0, H[i-1,j-1] + s(q[i], r[j]), H[i-1,j] - g, H[i,j-1] - g)`
//!
//! ## Optimization Strategies
//!
//! - **Cache blocking**: sweep the matrix in column windows so the live row stays in L1
//! - **Multicore**: distribute independent pairs over a fixed worker pool
//! - **Bit packing**: 2-bit bases, 32 match tests per XOR
//! - **Striping**: Farrar's query-striped layout with a lazy F correction
//! - **Inter-sequence SIMD**: one pair per vector lane (Alpern et al.)

pub mod code;
pub mod pool;
#[cfg(test)]
mod test;

pub use code::*;

use crate::capability::CapabilityFlags;
use crate::corpus::{Corpus, SequencePair};
use crate::error::AlignError;

/// Alignment score. Per-pair kernels return one pair's score, batch kernels the
/// sum over the corpus.
pub type Score = i64;

/// Score for aligning two identical bases
pub const MATCH: i32 = 2;

/// Score for aligning two different bases
pub const MISMATCH: i32 = -1;

/// Penalty subtracted for every gap position
pub const GAP: i32 = 1;

/// Entry point invoked once per corpus element
pub type PerElementFn = fn(&SequencePair) -> Result<Score, AlignError>;

/// Entry point invoked once with the whole corpus
pub type BatchFn = fn(&Corpus, CapabilityFlags) -> Result<Score, AlignError>;

/// Substitution score for a pair of bases.
#[inline(always)]
pub fn substitution(a: u8, b: u8) -> i32 {
    if a == b {
        MATCH
    } else {
        MISMATCH
    }
}
