//! Smith-Waterman implementations.
//!
//! This module contains all implementation variants of the alignment kernel.

mod bithacked;
mod bithacked_striped;
mod multicore_alpern;
mod multicore_windowed;
mod original;
mod simd_alpern;
mod windowed;

pub use bithacked::{pack, sw_bithacked, PackedSequence};
pub use bithacked_striped::{sw_bithacked_striped, STRIPE_LANES};
pub use multicore_alpern::sw_multicore_alpern;
pub use multicore_windowed::sw_multicore_windowed;
pub use original::{sw_base, sw_score};
pub use simd_alpern::sw_simd_alpern;
pub use windowed::{sw_windowed, windowed_score, WINDOW};
