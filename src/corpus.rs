//! Synthetic corpus generation.
//!
//! A corpus is `n` pairs of DNA sequences, every sequence `m` bases long, each
//! base drawn uniformly from [`ALPHABET`] with the caller's random source.

use crate::error::BenchError;
use rand::Rng;

/// The 4-symbol alphabet every generated sequence is drawn from.
pub const ALPHABET: &[u8; 4] = b"ACGT";

/// Default number of pairs in a corpus.
pub const DEFAULT_PAIRS: usize = 1 << 6;

/// Default length of every sequence.
pub const DEFAULT_LENGTH: usize = 1 << 14;

/// Two sequences of equal length; the first is aligned against the second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequencePair {
    pub query: Vec<u8>,
    pub reference: Vec<u8>,
}

impl SequencePair {
    pub fn new(query: impl Into<Vec<u8>>, reference: impl Into<Vec<u8>>) -> Self {
        Self {
            query: query.into(),
            reference: reference.into(),
        }
    }
}

/// Ordered collection of pairs sharing one sequence length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
    pairs: Vec<SequencePair>,
    length: usize,
}

impl Corpus {
    /// Wrap existing pairs. Fails if any sequence differs from `length`.
    pub fn from_pairs(pairs: Vec<SequencePair>, length: usize) -> Option<Self> {
        pairs
            .iter()
            .all(|p| p.query.len() == length && p.reference.len() == length)
            .then_some(Self { pairs, length })
    }

    pub fn pairs(&self) -> &[SequencePair] {
        &self.pairs
    }

    /// Common length of every sequence in the corpus.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SequencePair> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a SequencePair;
    type IntoIter = std::slice::Iter<'a, SequencePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Build a random sequence of `length` bases.
fn random_sequence<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Option<Vec<u8>> {
    let mut seq = Vec::new();
    seq.try_reserve_exact(length).ok()?;
    seq.extend((0..length).map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())]));
    Some(seq)
}

/// Generate `n` pairs of sequences of length `m`.
///
/// The only source of randomness is `rng`, so a seeded generator reproduces
/// the same corpus. Allocation failures are reported instead of aborting.
///
/// # Example
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use sw_bench::corpus::generate;
///
/// let corpus = generate(4, 8, &mut StdRng::seed_from_u64(7)).unwrap();
/// assert_eq!(corpus.len(), 4);
/// assert!(corpus.iter().all(|p| p.query.len() == 8 && p.reference.len() == 8));
/// ```
pub fn generate<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> Result<Corpus, BenchError> {
    let failure = || BenchError::Generation {
        pairs: n,
        length: m,
    };

    let mut pairs = Vec::new();
    pairs.try_reserve_exact(n).map_err(|_| failure())?;

    for _ in 0..n {
        let query = random_sequence(m, rng).ok_or_else(failure)?;
        let reference = random_sequence(m, rng).ok_or_else(failure)?;
        pairs.push(SequencePair { query, reference });
    }

    Ok(Corpus { pairs, length: m })
}
