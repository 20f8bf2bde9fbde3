//! Cache-blocked kernel spread over the shared worker pool, one pair per task.

use super::windowed::{windowed_score, WINDOW};
use crate::alignment::{pool, Score};
use crate::capability::CapabilityFlags;
use crate::corpus::Corpus;
use crate::error::AlignError;
use rayon::prelude::*;

/// Batch entry point for the `multicore-windowed` variant.
pub fn sw_multicore_windowed(
    corpus: &Corpus,
    _capability: CapabilityFlags,
) -> Result<Score, AlignError> {
    let total = pool::install(|| {
        corpus
            .pairs()
            .par_iter()
            .map(|pair| Score::from(windowed_score(&pair.query, &pair.reference, WINDOW)))
            .sum()
    });
    Ok(total)
}
