//! Vector capability probing.
//!
//! The probe runs once at startup and the resulting [`CapabilityFlags`] value
//! is handed to the kernels that pick a vector code path. It never changes the
//! behavior of the harness itself.

use std::fmt;

/// Widest vector register usable for 32-bit lanes on this machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityFlags {
    /// No AVX2 or AVX-512: SIMD kernels fall back to scalar code
    #[default]
    None,
    /// 256-bit registers (AVX2), 8 lanes
    Wide8,
    /// 512-bit registers (AVX-512F), 16 lanes
    Wide16,
}

impl CapabilityFlags {
    /// Probe the running CPU.
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx512f") {
                return CapabilityFlags::Wide16;
            }
            if is_x86_feature_detected!("avx2") {
                return CapabilityFlags::Wide8;
            }
        }
        CapabilityFlags::None
    }

    /// Detected capability, optionally lowered to `None` by the operator.
    ///
    /// The probe can only be lowered: forcing a wider path than the CPU
    /// supports would execute unsupported instructions.
    pub fn detect_with(force_scalar: bool) -> Self {
        if force_scalar {
            CapabilityFlags::None
        } else {
            Self::detect()
        }
    }

    /// Number of 32-bit lanes per register, 0 when there is no vector support.
    pub const fn lanes(self) -> usize {
        match self {
            CapabilityFlags::None => 0,
            CapabilityFlags::Wide8 => 8,
            CapabilityFlags::Wide16 => 16,
        }
    }

    /// Register width in bits.
    pub const fn register_bits(self) -> usize {
        self.lanes() * 32
    }

    /// `true` when no vector path is available.
    pub const fn is_degraded(self) -> bool {
        matches!(self, CapabilityFlags::None)
    }

    /// One-line banner shown to the operator at startup.
    pub fn banner(self) -> String {
        match self {
            CapabilityFlags::None => "Warning: AVX2 and AVX-512 unavailable or disabled; \
                 SIMD variants fall back to scalar code."
                .to_string(),
            wide => format!(
                "Using {} bits wide registers over {} elements per register ...",
                wide.register_bits(),
                wide.lanes()
            ),
        }
    }
}

impl fmt::Display for CapabilityFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CapabilityFlags::None => "none",
            CapabilityFlags::Wide8 => "wide8",
            CapabilityFlags::Wide16 => "wide16",
        };
        f.write_str(name)
    }
}
