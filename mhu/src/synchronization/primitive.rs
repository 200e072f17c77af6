use core::{
    marker::PhantomData,
    sync::atomic::{AtomicBool, Ordering},
};
use lock_api::{GuardSend, RawMutex};
use spin::relax::{RelaxStrategy, Spin};

/// Test-and-test-and-set spinlock.
///
/// Atomics on aarch64 only behave once the MMU and data caches are enabled and
/// the lock lives in Normal cacheable memory. Before that, use a lock that does
/// not rely on exclusives, e.g. through a [`super::LockTable`] backed by a
/// bakery implementation.
pub struct RawSpinlock<R = Spin> {
    locked: AtomicBool,
    _relax: PhantomData<fn() -> R>,
}

unsafe impl<R: RelaxStrategy> RawMutex for RawSpinlock<R> {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: RawSpinlock<R> = RawSpinlock {
        locked: AtomicBool::new(false),
        _relax: PhantomData,
    };

    type GuardMarker = GuardSend;

    fn lock(&self) {
        while !self.try_lock() {
            while self.is_locked() {
                R::relax();
            }
        }
    }

    fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}
