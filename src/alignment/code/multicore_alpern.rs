//! Inter-sequence SIMD groups distributed over the shared worker pool.

use super::simd_alpern::{group_score, group_width};
use crate::alignment::{pool, Score};
use crate::capability::CapabilityFlags;
use crate::corpus::Corpus;
use crate::error::AlignError;
use rayon::prelude::*;

/// Batch entry point for the `multicore-alpern` variant.
pub fn sw_multicore_alpern(
    corpus: &Corpus,
    capability: CapabilityFlags,
) -> Result<Score, AlignError> {
    pool::install(|| {
        corpus
            .pairs()
            .par_chunks(group_width(capability))
            .map(|group| group_score(group, capability))
            .try_reduce(|| 0, |a, b| Ok(a + b))
    })
}
