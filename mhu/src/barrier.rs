//! Ordering between normal memory and the MHU doorbell.
//!
//! Payloads for the SCP live in shared memory. They must be observable by the
//! SCP before the bit that tells it to look at them.

#[cfg(target_arch = "aarch64")]
#[path = "_arch/aarch64/barrier.rs"]
mod arch_barrier;

#[cfg(target_arch = "aarch64")]
pub use arch_barrier::*;

/// Orders all earlier stores before any later store, device stores included.
#[cfg(not(target_arch = "aarch64"))]
#[inline(always)]
pub fn write_barrier() {
    core::sync::atomic::fence(core::sync::atomic::Ordering::SeqCst);
}
