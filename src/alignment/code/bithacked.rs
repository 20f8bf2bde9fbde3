//! Bit-packed implementation.
//!
//! Bases are stored as 2-bit codes, 32 per `u64`. For every query base, one
//! XOR against a broadcast of its code followed by a fold yields a match mask
//! for 32 reference columns at once, replacing 32 byte comparisons.

use crate::alignment::{Score, GAP, MATCH, MISMATCH};
use crate::corpus::SequencePair;
use crate::error::AlignError;

/// Bases per packed word
const BASES_PER_WORD: usize = 32;

/// Low bit of every 2-bit slot
const LOW_BITS: u64 = 0x5555_5555_5555_5555;

/// Each 2-bit code replicated across a word, indexed by code
const BROADCAST: [u64; 4] = [0, LOW_BITS, LOW_BITS << 1, u64::MAX];

/// A DNA sequence packed at 2 bits per base (A=0, C=1, G=2, T=3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedSequence {
    words: Vec<u64>,
    len: usize,
}

impl PackedSequence {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// 2-bit code of the base at `idx`.
    #[inline(always)]
    pub fn code(&self, idx: usize) -> usize {
        ((self.words[idx / BASES_PER_WORD] >> (2 * (idx % BASES_PER_WORD))) & 0b11) as usize
    }
}

#[inline(always)]
fn encode(base: u8) -> Option<u64> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Pack a sequence into 2-bit codes.
///
/// # Errors
/// Returns [`AlignError::InvalidSymbol`] for any byte outside `ACGT`.
pub fn pack(seq: &[u8]) -> Result<PackedSequence, AlignError> {
    let mut words = vec![0u64; seq.len().div_ceil(BASES_PER_WORD)];

    for (position, &base) in seq.iter().enumerate() {
        let code = encode(base).ok_or(AlignError::InvalidSymbol {
            symbol: char::from(base),
            position,
        })?;
        words[position / BASES_PER_WORD] |= code << (2 * (position % BASES_PER_WORD));
    }

    Ok(PackedSequence {
        words,
        len: seq.len(),
    })
}

/// Bit `2k` is set when slot `k` of `word` holds `code`.
#[inline(always)]
fn match_mask(word: u64, code: usize) -> u64 {
    let diff = word ^ BROADCAST[code];
    !(diff | (diff >> 1)) & LOW_BITS
}

/// Best local alignment score over packed sequences.
fn packed_score(query: &PackedSequence, reference: &PackedSequence) -> i32 {
    if query.is_empty() || reference.is_empty() {
        return 0;
    }

    let mut row = vec![0i32; reference.len() + 1];
    let mut best = 0;

    for i in 0..query.len() {
        let q = query.code(i);
        let mut diag = 0;

        for (w, &word) in reference.words().iter().enumerate() {
            let mask = match_mask(word, q);
            let base = w * BASES_PER_WORD;
            let cols = BASES_PER_WORD.min(reference.len() - base);

            for k in 0..cols {
                let j = base + k + 1;
                let hit = ((mask >> (2 * k)) & 1) as i32;
                let s = MISMATCH + hit * (MATCH - MISMATCH);

                let up = row[j];
                let h = (diag + s).max(up - GAP).max(row[j - 1] - GAP).max(0);
                row[j] = h;
                diag = up;
                best = best.max(h);
            }
        }
    }

    best
}

/// Per-element entry point for the `bithacked` variant.
pub fn sw_bithacked(pair: &SequencePair) -> Result<Score, AlignError> {
    let query = pack(&pair.query)?;
    let reference = pack(&pair.reference)?;
    Ok(Score::from(packed_score(&query, &reference)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_codes() {
        let packed = pack(b"ACGTTGCA").unwrap();
        let codes: Vec<usize> = (0..packed.len()).map(|i| packed.code(i)).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 3, 2, 1, 0]);
    }

    #[test]
    fn test_pack_spans_words() {
        let seq: Vec<u8> = b"ACGT".iter().cycle().take(70).copied().collect();
        let packed = pack(&seq).unwrap();
        assert_eq!(packed.words().len(), 3);
        assert_eq!(packed.code(65), 1);
        assert_eq!(packed.code(69), 1);
    }

    #[test]
    fn test_pack_rejects_unknown() {
        let err = pack(b"ACNT").unwrap_err();
        assert_eq!(
            err,
            AlignError::InvalidSymbol {
                symbol: 'N',
                position: 2
            }
        );
    }

    #[test]
    fn test_pack_is_case_sensitive() {
        let err = pack(b"ACgT").unwrap_err();
        assert_eq!(
            err,
            AlignError::InvalidSymbol {
                symbol: 'g',
                position: 2
            }
        );
    }

    #[test]
    fn test_match_mask() {
        // slots: A C G T A ...
        let packed = pack(b"ACGTA").unwrap();
        let word = packed.words()[0];
        assert_eq!(match_mask(word, 0) & 0x3ff, 0b01_0000_0001);
        assert_eq!(match_mask(word, 3) & 0x3ff, 0b00_0100_0000);
    }
}
