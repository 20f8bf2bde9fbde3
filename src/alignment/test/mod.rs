//! Cross-variant tests: every kernel must agree with the scalar baseline.

use crate::alignment::code::*;
use crate::alignment::Score;
use crate::capability::CapabilityFlags;
use crate::corpus::{generate, Corpus, SequencePair};
use crate::error::AlignError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn reference_total(corpus: &Corpus) -> Score {
    corpus.iter().map(|p| sw_base(p).unwrap()).sum()
}

fn capabilities() -> Vec<CapabilityFlags> {
    vec![CapabilityFlags::None, CapabilityFlags::Wide8, CapabilityFlags::Wide16]
}

#[test]
fn test_original_known_values() {
    assert_eq!(sw_score(b"ACGT", b"ACGT"), 8);
    assert_eq!(sw_score(b"AAAA", b"TTTT"), 0);
    // one gap: ACGT-ACGT vs ACGTTACGT -> 8 matches, 1 gap
    assert_eq!(sw_score(b"ACGTACGT", b"ACGTTACGT"), 15);
    // one mismatch in the middle: 6 matches + 1 mismatch
    assert_eq!(sw_score(b"ACGAACG", b"ACGTACG"), 11);
}

#[test]
fn test_original_empty() {
    assert_eq!(sw_score(b"", b""), 0);
    assert_eq!(sw_score(b"ACGT", b""), 0);
    assert_eq!(sw_score(b"", b"ACGT"), 0);
}

#[test]
fn test_per_element_variants_match_original() {
    let mut rng = StdRng::seed_from_u64(0xcafebabe);
    // Lengths chosen around word (32) and stripe (8) boundaries
    for length in [1, 2, 7, 8, 9, 31, 32, 33, 100, 257] {
        let corpus = generate(6, length, &mut rng).unwrap();
        for pair in &corpus {
            let expected = sw_base(pair).unwrap();
            assert_eq!(sw_bithacked(pair).unwrap(), expected, "bithacked, length {}", length);
            assert_eq!(
                sw_bithacked_striped(pair).unwrap(),
                expected,
                "bithacked-striped, length {}",
                length
            );
        }
    }
}

#[test]
fn test_windowed_score_any_window() {
    let mut rng = StdRng::seed_from_u64(42);
    let corpus = generate(4, 300, &mut rng).unwrap();
    for pair in &corpus {
        let expected = sw_score(&pair.query, &pair.reference);
        for window in [1, 7, 64, 299, 300, 1024] {
            assert_eq!(
                windowed_score(&pair.query, &pair.reference, window),
                expected,
                "window {}",
                window
            );
        }
    }
}

#[test]
fn test_batch_variants_match_original() {
    let mut rng = StdRng::seed_from_u64(0xdeadbeef);
    // 21 pairs: not a multiple of 8 or 16, so the last group is partial
    let corpus = generate(21, 120, &mut rng).unwrap();
    let expected = reference_total(&corpus);

    for cap in capabilities() {
        assert_eq!(sw_windowed(&corpus, cap).unwrap(), expected, "windowed {}", cap);
        assert_eq!(
            sw_multicore_windowed(&corpus, cap).unwrap(),
            expected,
            "multicore-windowed {}",
            cap
        );
        assert_eq!(sw_simd_alpern(&corpus, cap).unwrap(), expected, "simd-alpern {}", cap);
        assert_eq!(
            sw_multicore_alpern(&corpus, cap).unwrap(),
            expected,
            "multicore-alpern {}",
            cap
        );
    }
}

#[test]
fn test_batch_variants_empty_corpus() {
    let corpus = generate(0, 10, &mut StdRng::seed_from_u64(1)).unwrap();
    for cap in capabilities() {
        assert_eq!(sw_windowed(&corpus, cap).unwrap(), 0);
        assert_eq!(sw_multicore_windowed(&corpus, cap).unwrap(), 0);
        assert_eq!(sw_simd_alpern(&corpus, cap).unwrap(), 0);
        assert_eq!(sw_multicore_alpern(&corpus, cap).unwrap(), 0);
    }
}

#[test]
fn test_bit_packed_variants_reject_unknown_symbols() {
    // Lowercase bases are not in the alphabet: the byte-wise baseline scores
    // them as mismatches, so the packed kernels must refuse them.
    for (query, reference, symbol, position) in [
        ("ACGN", "ACGT", 'N', 3),
        ("acgt", "ACGT", 'a', 0),
        ("ACGT", "ACgT", 'g', 2),
    ] {
        let pair = SequencePair::new(query, reference);
        let expected = AlignError::InvalidSymbol { symbol, position };
        assert_eq!(sw_bithacked(&pair).unwrap_err(), expected, "{} / {}", query, reference);
        assert_eq!(
            sw_bithacked_striped(&pair).unwrap_err(),
            expected,
            "{} / {}",
            query,
            reference
        );
    }
}
