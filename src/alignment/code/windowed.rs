//! Cache-blocked implementation.
//!
//! The reference is cut into windows of [`WINDOW`] columns. Each window is
//! swept top to bottom over every query row; only a window-wide row and the
//! boundary column between windows are kept, so the hot row stays in L1.

use crate::alignment::{substitution, Score, GAP};
use crate::capability::CapabilityFlags;
use crate::corpus::Corpus;
use crate::error::AlignError;

/// Number of reference columns per window
pub const WINDOW: usize = 512;

/// Best local alignment score using column windows of `window` columns.
///
/// # Panics
/// Panics if `window` is zero.
pub fn windowed_score(query: &[u8], reference: &[u8], window: usize) -> i32 {
    assert!(window > 0, "Window must be at least one column wide");

    if query.is_empty() || reference.is_empty() {
        return 0;
    }

    // boundary[i] = H[i, c0 - 1], the last column of the previous window
    let mut boundary = vec![0i32; query.len() + 1];
    let mut row = vec![0i32; window + 1];
    let mut best = 0;

    for c0 in (0..reference.len()).step_by(window) {
        let cols = &reference[c0..(c0 + window).min(reference.len())];
        let w = cols.len();
        row[..=w].fill(0);

        for i in 1..=query.len() {
            let q = query[i - 1];
            // row[0] still holds H[i-1, c0-1] from the previous row
            let mut diag = row[0];
            row[0] = boundary[i];

            for k in 1..=w {
                let up = row[k];
                let h = (diag + substitution(q, cols[k - 1]))
                    .max(up - GAP)
                    .max(row[k - 1] - GAP)
                    .max(0);
                row[k] = h;
                diag = up;
                best = best.max(h);
            }

            boundary[i] = row[w];
        }
    }

    best
}

/// Batch entry point for the `windowed` variant: every pair, in order, on the calling thread.
pub fn sw_windowed(corpus: &Corpus, _capability: CapabilityFlags) -> Result<Score, AlignError> {
    Ok(corpus
        .iter()
        .map(|pair| Score::from(windowed_score(&pair.query, &pair.reference, WINDOW)))
        .sum())
}
