//! Inter-sequence SIMD implementation after Alpern, Carter and Gatlin.
//!
//! Instead of vectorizing inside one matrix, `L` independent pairs are aligned
//! at once, lane `l` of every vector belonging to pair `l` of the group. All
//! lanes follow the exact same recurrence, so there are no cross-lane
//! dependencies and no shuffles. The lane kernel is compiled with the AVX2 or
//! AVX-512 target feature and only entered after the CPU reports it.

use super::original::sw_base;
use crate::alignment::{Score, GAP, MATCH, MISMATCH};
use crate::capability::CapabilityFlags;
use crate::corpus::{Corpus, SequencePair};
use crate::error::AlignError;

/// Interleave a group of pairs so that index `i` holds base `i` of every pair.
///
/// Lanes past the end of the group repeat the first pair; their scores are dropped.
fn interleave<const L: usize>(
    group: &[SequencePair],
) -> Result<(Vec<[u8; L]>, Vec<[u8; L]>), AlignError> {
    let first = &group[0];
    let (n, m) = (first.query.len(), first.reference.len());

    for pair in group {
        if pair.query.len() != n {
            return Err(AlignError::LengthMismatch {
                expected: n,
                actual: pair.query.len(),
            });
        }
        if pair.reference.len() != m {
            return Err(AlignError::LengthMismatch {
                expected: m,
                actual: pair.reference.len(),
            });
        }
    }

    let lane = |l: usize| group.get(l).unwrap_or(first);
    let query = (0..n).map(|i| std::array::from_fn(|l| lane(l).query[i])).collect();
    let reference = (0..m).map(|j| std::array::from_fn(|l| lane(l).reference[j])).collect();
    Ok((query, reference))
}

/// Lane-parallel recurrence. Inlined into the feature-gated wrappers below so
/// it is code-generated for their register width.
#[inline(always)]
fn lane_kernel<const L: usize>(query: &[[u8; L]], reference: &[[u8; L]]) -> [i32; L] {
    let mut best = [0i32; L];
    if query.is_empty() || reference.is_empty() {
        return best;
    }

    let mut row = vec![[0i32; L]; reference.len() + 1];

    for q in query {
        let mut diag = [0i32; L];
        for j in 1..=reference.len() {
            let r = &reference[j - 1];
            let up = row[j];
            let left = row[j - 1];

            let mut h = [0i32; L];
            for l in 0..L {
                let s = if q[l] == r[l] { MATCH } else { MISMATCH };
                h[l] = (diag[l] + s).max(up[l] - GAP).max(left[l] - GAP).max(0);
                best[l] = best[l].max(h[l]);
            }

            row[j] = h;
            diag = up;
        }
    }

    best
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn lane_kernel_avx2(query: &[[u8; 8]], reference: &[[u8; 8]]) -> [i32; 8] {
    lane_kernel::<8>(query, reference)
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx512f")]
unsafe fn lane_kernel_avx512(query: &[[u8; 16]], reference: &[[u8; 16]]) -> [i32; 16] {
    lane_kernel::<16>(query, reference)
}

fn lanes8(query: &[[u8; 8]], reference: &[[u8; 8]]) -> [i32; 8] {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            // SAFETY: the CPU supports AVX2
            return unsafe { lane_kernel_avx2(query, reference) };
        }
    }
    lane_kernel::<8>(query, reference)
}

fn lanes16(query: &[[u8; 16]], reference: &[[u8; 16]]) -> [i32; 16] {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx512f") {
            // SAFETY: the CPU supports AVX-512F
            return unsafe { lane_kernel_avx512(query, reference) };
        }
    }
    lane_kernel::<16>(query, reference)
}

fn group_sum<const L: usize>(
    group: &[SequencePair],
    kernel: fn(&[[u8; L]], &[[u8; L]]) -> [i32; L],
) -> Result<Score, AlignError> {
    let (query, reference) = interleave::<L>(group)?;
    let scores = kernel(&query, &reference);
    Ok(scores[..group.len()].iter().map(|&s| Score::from(s)).sum())
}

/// Sum of scores for one group of at most `capability.lanes()` pairs.
///
/// With no vector support each pair goes through the scalar baseline.
pub(crate) fn group_score(
    group: &[SequencePair],
    capability: CapabilityFlags,
) -> Result<Score, AlignError> {
    if group.is_empty() {
        return Ok(0);
    }
    match capability {
        CapabilityFlags::None => group.iter().map(sw_base).sum(),
        CapabilityFlags::Wide8 => group_sum::<8>(group, lanes8),
        CapabilityFlags::Wide16 => group_sum::<16>(group, lanes16),
    }
}

/// Pairs handled per group; 1 in degraded mode.
pub(crate) fn group_width(capability: CapabilityFlags) -> usize {
    capability.lanes().max(1)
}

/// Batch entry point for the `simd-alpern` variant.
pub fn sw_simd_alpern(corpus: &Corpus, capability: CapabilityFlags) -> Result<Score, AlignError> {
    corpus
        .pairs()
        .chunks(group_width(capability))
        .map(|group| group_score(group, capability))
        .sum()
}
