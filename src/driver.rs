//! Benchmark driver: resolve, generate, time, report.

use crate::alignment::{pool, Score};
use crate::capability::CapabilityFlags;
use crate::corpus::{self, Corpus};
use crate::error::BenchError;
use crate::registry::{self, CallingConvention, EntryPoint, Variant, VariantDescriptor};
use crate::utils::timer::{time_each, time_once, TimingConfig, TimingResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run parameters, fixed for the whole run
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Number of sequence pairs in the corpus (default: 64)
    pub pairs: usize,
    /// Length of every sequence (default: 16384)
    pub length: usize,
    /// Worker pool size for multicore variants (default: 4)
    pub threads: usize,
    /// Seed for corpus generation
    pub seed: u64,
    /// Vector capability handed to batch variants (default: probed from the CPU)
    pub capability: CapabilityFlags,
    pub timing: TimingConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pairs: corpus::DEFAULT_PAIRS,
            length: corpus::DEFAULT_LENGTH,
            threads: pool::DEFAULT_THREADS,
            seed: 0,
            capability: CapabilityFlags::detect(),
            timing: TimingConfig::default(),
        }
    }
}

/// Outcome of a timed run
#[derive(Clone, Debug)]
pub struct Report {
    pub variant: Variant,
    pub convention: CallingConvention,
    pub capability: CapabilityFlags,
    pub pairs: usize,
    pub length: usize,
    pub seed: u64,
    /// Size of the worker pool in effect
    pub workers: usize,
    pub timing: TimingResult,
}

/// Time `descriptor` over `corpus` with the strategy its calling convention names.
pub fn measure(
    descriptor: &VariantDescriptor,
    corpus: &Corpus,
    capability: CapabilityFlags,
    timing: &TimingConfig,
) -> Result<TimingResult, BenchError> {
    let result = match descriptor.entry {
        EntryPoint::PerElement(f) => time_each(corpus, timing, f),
        EntryPoint::Batch(f) => time_once(corpus, |c| f(c, capability)),
    };
    result.map_err(|source| BenchError::Invocation {
        variant: descriptor.variant,
        source,
    })
}

/// Full run drawing the corpus from `rng`.
///
/// The identifier is resolved first: an unknown one fails before the worker
/// pool is touched or a single random number is drawn.
pub fn run_with_rng<R: Rng + ?Sized>(
    identifier: &str,
    config: &RunConfig,
    rng: &mut R,
) -> Result<Report, BenchError> {
    let descriptor = registry::resolve(identifier)?;
    let workers = pool::configure(config.threads)?;
    let corpus = corpus::generate(config.pairs, config.length, rng)?;
    let timing = measure(&descriptor, &corpus, config.capability, &config.timing)?;

    Ok(Report {
        variant: descriptor.variant,
        convention: descriptor.convention(),
        capability: config.capability,
        pairs: corpus.len(),
        length: corpus.length(),
        seed: config.seed,
        workers,
        timing,
    })
}

/// Full run with a corpus seeded from `config.seed`.
pub fn run(identifier: &str, config: &RunConfig) -> Result<Report, BenchError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    run_with_rng(identifier, config, &mut rng)
}

/// Run every variant over one corpus and check each total against the baseline.
///
/// Returns the per-variant totals in registry order.
pub fn verify(config: &RunConfig) -> Result<Vec<(VariantDescriptor, Score)>, BenchError> {
    pool::configure(config.threads)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let corpus = corpus::generate(config.pairs, config.length, &mut rng)?;

    let expected = Variant::Base
        .descriptor()
        .score_corpus(&corpus, config.capability)?;

    registry::all()
        .map(|descriptor| {
            let actual = descriptor.score_corpus(&corpus, config.capability)?;
            if actual != expected {
                return Err(BenchError::Verification {
                    variant: descriptor.variant,
                    expected,
                    actual,
                });
            }
            Ok((descriptor, actual))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> RunConfig {
        RunConfig {
            pairs: 5,
            length: 40,
            threads: 2,
            seed: 17,
            ..RunConfig::default()
        }
    }

    #[test]
    fn test_default_config_uses_probed_capability() {
        let config = RunConfig::default();
        assert_eq!(config.capability, CapabilityFlags::detect());
        assert_eq!(config.pairs, corpus::DEFAULT_PAIRS);
        assert_eq!(config.length, corpus::DEFAULT_LENGTH);
    }

    #[test]
    fn test_unknown_variant_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut untouched = StdRng::seed_from_u64(5);

        let err = run_with_rng("bogus", &small_config(), &mut rng).unwrap_err();
        assert!(matches!(err, BenchError::UnknownVariant(ref id) if id == "bogus"));
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn test_per_element_run() {
        let report = run("base", &small_config()).unwrap();
        assert_eq!(report.convention, CallingConvention::PerElement);
        assert_eq!(report.timing.count, 5);
        assert_eq!(report.pairs, 5);
        assert_eq!(report.length, 40);
    }

    #[test]
    fn test_batch_run() {
        let report = run("multicore-alpern", &small_config()).unwrap();
        assert_eq!(report.convention, CallingConvention::Batch);
        assert_eq!(report.timing.count, 1);
        assert_eq!(report.timing.average(), report.timing.elapsed);
    }

    #[test]
    fn test_checksum_independent_of_convention() {
        let config = small_config();
        let base = run("base", &config).unwrap();
        let batch = run("windowed", &config).unwrap();
        assert_eq!(base.timing.checksum, batch.timing.checksum);
    }

    #[test]
    fn test_verify_all_variants() {
        let totals = verify(&small_config()).unwrap();
        assert_eq!(totals.len(), Variant::ALL.len());
        let first = totals[0].1;
        assert!(totals.iter().all(|(_, score)| *score == first));
    }
}
