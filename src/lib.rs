//! # sw-bench
//!
//! A harness that times Smith-Waterman implementations built with different
//! micro-optimization techniques on the same synthetic corpus.

pub mod alignment;
pub mod capability;
pub mod corpus;
pub mod driver;
pub mod error;
pub mod registry;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::alignment::Score;
    pub use crate::capability::CapabilityFlags;
    pub use crate::corpus::{generate, Corpus, SequencePair};
    pub use crate::driver::{run, run_with_rng, verify, Report, RunConfig};
    pub use crate::error::{AlignError, BenchError};
    pub use crate::registry::{resolve, CallingConvention, Variant, VariantDescriptor};
    pub use crate::utils::timer::{PinStrategy, TimingConfig, TimingResult};
}
