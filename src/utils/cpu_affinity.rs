//! Thread pinning for per-element measurements.
//!
//! Pinning keeps the measuring thread on one core so a migration does not land
//! inside a timed call. Linux uses `sched_setaffinity` through libc; other
//! platforms pin nothing and report it.

#[cfg(target_os = "linux")]
mod platform {
    /// Affinity mask of the calling thread
    pub fn current_mask() -> Option<libc::cpu_set_t> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(set)
        }
    }

    pub fn set_mask(set: &libc::cpu_set_t) -> bool {
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set) == 0 }
    }

    /// Core the calling thread is running on
    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    /// Restrict the calling thread to `core`
    pub fn pin(core: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            set_mask(&set)
        }
    }

    pub type Mask = libc::cpu_set_t;
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Mask = ();

    pub fn current_mask() -> Option<Mask> {
        None
    }

    pub fn set_mask(_set: &Mask) -> bool {
        false
    }

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }
}

/// RAII guard for CPU pinning - pins on creation, restores the previous mask on drop.
///
/// # Example
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // Thread pinned
///     // ... timed call ...
/// } // Previous affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::Mask>,
}

impl CpuPinGuard {
    /// Pin the calling thread to the core it is currently running on.
    pub fn new() -> Self {
        let saved = platform::current_mask();
        let pinned_core = match (&saved, platform::current_cpu()) {
            (Some(_), Some(core)) if platform::pin(core) => Some(core),
            _ => None,
        };
        Self { pinned_core, saved }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let (Some(_), Some(saved)) = (self.pinned_core, self.saved.as_ref()) {
            let restored = platform::set_mask(saved);
            debug_assert!(restored, "failed to restore the CPU affinity mask");
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
