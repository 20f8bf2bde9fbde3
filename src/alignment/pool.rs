//! Process-wide worker pool shared by the multicore kernels.
//!
//! The pool is configured once, before any multicore kernel runs. Kernels call
//! [`install`] and never size the pool themselves.

use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::OnceLock;

/// Worker count used when the operator does not pick one
pub const DEFAULT_THREADS: usize = 4;

static POOL: OnceLock<ThreadPool> = OnceLock::new();

/// Build the shared pool with `threads` workers (0 lets rayon pick).
///
/// Only the first call builds a pool; later calls keep it. Returns the number
/// of workers in the pool that is in effect.
pub fn configure(threads: usize) -> Result<usize, rayon::ThreadPoolBuildError> {
    if let Some(pool) = POOL.get() {
        return Ok(pool.current_num_threads());
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|idx| format!("sw-worker-{}", idx))
        .build()?;
    // Losing a race leaves the other caller's pool in place.
    let _ = POOL.set(pool);

    Ok(current_num_threads())
}

/// Number of workers multicore kernels will run on.
pub fn current_num_threads() -> usize {
    POOL.get()
        .map(ThreadPool::current_num_threads)
        .unwrap_or_else(rayon::current_num_threads)
}

/// Run `op` inside the configured pool, or rayon's global pool if none was configured.
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match POOL.get() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}
