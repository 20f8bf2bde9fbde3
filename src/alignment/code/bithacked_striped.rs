//! Striped implementation over bit-packed sequences.
//!
//! Farrar's layout: the query is split into [`STRIPE_LANES`] stripes of
//! `seg = ceil(n / L)` positions, lane `l` of segment `j` holding query position
//! `l * seg + j`. Vertical dependencies then cross segments instead of lanes,
//! and the few that wrap between lanes are fixed up by the lazy F loop.
//! The query profile is indexed by the 2-bit code of the reference base.

use super::bithacked::{pack, PackedSequence};
use crate::alignment::{Score, GAP, MATCH, MISMATCH};
use crate::corpus::SequencePair;
use crate::error::AlignError;

/// Lanes per stripe vector (one 256-bit register of `i32`)
pub const STRIPE_LANES: usize = 8;

/// Profile score for padding positions past the end of the query
const PAD: i32 = -(1 << 20);

type Lanes = [i32; STRIPE_LANES];

const ZERO: Lanes = [0; STRIPE_LANES];

#[inline(always)]
fn add(a: Lanes, b: Lanes) -> Lanes {
    std::array::from_fn(|l| a[l] + b[l])
}

#[inline(always)]
fn max(a: Lanes, b: Lanes) -> Lanes {
    std::array::from_fn(|l| a[l].max(b[l]))
}

#[inline(always)]
fn sub_gap(a: Lanes) -> Lanes {
    std::array::from_fn(|l| a[l] - GAP)
}

/// Move every lane up by one, shifting in zero.
#[inline(always)]
fn shift(a: Lanes) -> Lanes {
    std::array::from_fn(|l| if l == 0 { 0 } else { a[l - 1] })
}

#[inline(always)]
fn any_gt(a: Lanes, b: Lanes) -> bool {
    a.iter().zip(b.iter()).any(|(x, y)| x > y)
}

/// Query profile: `profile[code * seg + j]` scores segment `j` against a reference base with `code`.
fn build_profile(query: &PackedSequence, seg: usize) -> Vec<Lanes> {
    let mut profile = Vec::with_capacity(4 * seg);
    for code in 0..4 {
        for j in 0..seg {
            profile.push(std::array::from_fn(|l| {
                let pos = l * seg + j;
                if pos >= query.len() {
                    PAD
                } else if query.code(pos) == code {
                    MATCH
                } else {
                    MISMATCH
                }
            }));
        }
    }
    profile
}

fn striped_score(query: &PackedSequence, reference: &PackedSequence) -> i32 {
    if query.is_empty() || reference.is_empty() {
        return 0;
    }

    let seg = query.len().div_ceil(STRIPE_LANES);
    let profile = build_profile(query, seg);

    let mut h_store = vec![ZERO; seg];
    let mut h_load = vec![ZERO; seg];
    let mut e = vec![ZERO; seg];
    let mut best = ZERO;

    for r in 0..reference.len() {
        let code = reference.code(r);
        let prof = &profile[code * seg..(code + 1) * seg];

        let mut f = ZERO;
        // Diagonal for segment 0 is the previous column's last segment, one lane down
        let mut h = shift(h_store[seg - 1]);
        std::mem::swap(&mut h_store, &mut h_load);

        for j in 0..seg {
            h = max(max(max(add(h, prof[j]), e[j]), f), ZERO);
            best = max(best, h);
            h_store[j] = h;

            let h_gap = sub_gap(h);
            e[j] = max(sub_gap(e[j]), h_gap);
            f = max(sub_gap(f), h_gap);
            h = h_load[j];
        }

        // Lazy F: carry vertical gaps across the lane boundaries
        f = shift(f);
        let mut j = 0;
        while any_gt(f, h_store[j]) {
            h_store[j] = max(h_store[j], f);
            best = max(best, h_store[j]);
            e[j] = max(e[j], sub_gap(h_store[j]));
            f = sub_gap(f);

            j += 1;
            if j == seg {
                j = 0;
                f = shift(f);
            }
        }
    }

    best.into_iter().max().unwrap_or(0)
}

/// Per-element entry point for the `bithacked-striped` variant.
pub fn sw_bithacked_striped(pair: &SequencePair) -> Result<Score, AlignError> {
    let query = pack(&pair.query)?;
    let reference = pack(&pair.reference)?;
    Ok(Score::from(striped_score(&query, &reference)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift() {
        let a: Lanes = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(shift(a), [0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_profile_padding() {
        // 9 bases -> seg = 2, positions 9..16 are padding
        let query = pack(b"ACGTACGTA").unwrap();
        let profile = build_profile(&query, 2);
        assert_eq!(profile.len(), 8);
        // code A, segment 0: positions 0,2,4,6,8,10,12,14
        assert_eq!(profile[0], [MATCH, MISMATCH, MATCH, MISMATCH, MATCH, PAD, PAD, PAD]);
    }

    #[test]
    fn test_gap_crosses_lane_boundary() {
        // Query of 16 bases -> seg = 2; the gapped alignment must carry F across lanes
        let pair = SequencePair::new("ACGTACGTTTACGTAC", "ACGTACGTACGTAC");
        let expected = Score::from(crate::alignment::sw_score(&pair.query, &pair.reference));
        assert_eq!(sw_bithacked_striped(&pair).unwrap(), expected);
    }
}
