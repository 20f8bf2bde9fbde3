//! Timing strategies for the two calling conventions.
//!
//! - [`time_once`] brackets a single call that receives the whole corpus.
//! - [`time_each`] brackets one call per pair, in corpus order, and sums them.
//!
//! Both report `elapsed / count`, so the average is comparable whether or not
//! the kernel batches internally. Kernel results are opaque: they are summed
//! into a checksum and passed through [`black_box`], never inspected.

use std::hint::black_box;
use std::time::Duration;

pub use super::cpu_affinity::CpuPinGuard;
use super::bench::{elapsed, now, to_micros};
use crate::alignment::Score;
use crate::corpus::{Corpus, SequencePair};

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy for per-element measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once around the whole sequence of calls
    Global,
    /// Pin/unpin around each call
    #[default]
    PerExecution,
    /// Never pin
    Disabled,
}

/// Configuration for timing measurements
#[derive(Clone, Debug, Default)]
pub struct TimingConfig {
    /// Pinning used by [`time_each`]. [`time_once`] never pins: the kernel may
    /// spawn or wake worker threads that would otherwise inherit the mask.
    pub pin_strategy: PinStrategy,
}

/// Aggregate timing of one run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingResult {
    /// Total time spent inside the kernel
    pub elapsed: Duration,
    /// Number of kernel invocations
    pub count: usize,
    /// Sum of the scores the kernel returned
    pub checksum: Score,
}

impl TimingResult {
    /// `elapsed / count`, zero when nothing was invoked.
    pub fn average(&self) -> Duration {
        match u32::try_from(self.count) {
            Ok(0) => Duration::ZERO,
            Ok(count) => self.elapsed / count,
            Err(_) => Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.count as f64),
        }
    }

    /// Average in microseconds.
    pub fn average_micros(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        to_micros(self.elapsed) / self.count as f64
    }
}

/// Invoke `run` exactly once with the whole corpus.
pub fn time_once<F, E>(corpus: &Corpus, run: F) -> Result<TimingResult, E>
where
    F: FnOnce(&Corpus) -> Result<Score, E>,
{
    let start = now();
    let score = run(black_box(corpus));
    let total = elapsed(start);

    Ok(TimingResult {
        elapsed: total,
        count: 1,
        checksum: black_box(score?),
    })
}

/// Invoke `run` once per pair, in corpus order, summing the per-call durations.
///
/// The first failure aborts the measurement and is returned unchanged.
pub fn time_each<F, E>(corpus: &Corpus, config: &TimingConfig, mut run: F) -> Result<TimingResult, E>
where
    F: FnMut(&SequencePair) -> Result<Score, E>,
{
    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    let mut total = Duration::ZERO;
    let mut checksum: Score = 0;

    for pair in corpus {
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let start = now();
        let score = run(black_box(pair));
        total += elapsed(start);
        checksum = checksum.wrapping_add(black_box(score?));
    }

    Ok(TimingResult {
        elapsed: total,
        count: corpus.len(),
        checksum,
    })
}
