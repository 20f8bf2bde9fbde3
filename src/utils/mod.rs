//! Utility modules for timing and terminal output.

pub mod bench;
pub mod cpu_affinity;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{elapsed, now, time_seed, to_micros};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{time_each, time_once, PinStrategy, TimingConfig, TimingResult};
