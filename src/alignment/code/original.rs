//! Original (reference) implementation of Smith-Waterman.
//!
//! A plain two-row dynamic program that serves as the baseline for
//! correctness and performance comparison.

use crate::alignment::{substitution, Score, GAP};
use crate::corpus::SequencePair;
use crate::error::AlignError;

/// Best local alignment score of `query` against `reference`.
///
/// # Example
/// ```
/// use sw_bench::alignment::sw_score;
///
/// // "ACGT" aligns fully: 4 matches at +2
/// assert_eq!(sw_score(b"TTACGTTT", b"GGACGTGG"), 8);
/// assert_eq!(sw_score(b"", b"ACGT"), 0);
/// ```
pub fn sw_score(query: &[u8], reference: &[u8]) -> i32 {
    if query.is_empty() || reference.is_empty() {
        return 0;
    }

    // row[j] holds H[i-1, j] on entry to row i; row[0] stays 0
    let mut row = vec![0i32; reference.len() + 1];
    let mut best = 0;

    for &q in query {
        let mut diag = 0;
        for j in 1..=reference.len() {
            let up = row[j];
            let h = (diag + substitution(q, reference[j - 1]))
                .max(up - GAP)
                .max(row[j - 1] - GAP)
                .max(0);
            row[j] = h;
            diag = up;
            best = best.max(h);
        }
    }

    best
}

/// Per-element entry point for the `base` variant.
pub fn sw_base(pair: &SequencePair) -> Result<Score, AlignError> {
    Ok(Score::from(sw_score(&pair.query, &pair.reference)))
}
