//! Locks used to serialize callers of a mailbox channel.
//!
//! The channel does not care how mutual exclusion is implemented. It is handed
//! a [`LockHandle`] at construction time: either a lock object living next to
//! the channel (any [`lock_api::RawMutex`]) or an id into a [`LockTable`].

pub mod primitive;
pub mod table;

pub use primitive::RawSpinlock;
pub use table::{LockId, LockTable, TableLock};

use lock_api::RawMutex;

/// Capability to acquire and release one lock.
///
/// Unlike a guard-based mutex, acquisition and release happen in separate
/// calls, possibly in separate functions. The caller is responsible for
/// pairing them.
pub trait LockHandle {
    /// Brings the lock into its unlocked state. Called once, before the lock
    /// is shared.
    fn init(&self) {}

    /// Blocks until the caller owns the lock.
    fn acquire(&self);

    /// # Safety
    ///
    /// The caller must own the lock through a previous [`LockHandle::acquire`].
    unsafe fn release(&self);
}

impl<R: RawMutex> LockHandle for R {
    #[inline]
    fn acquire(&self) {
        self.lock();
    }

    #[inline]
    unsafe fn release(&self) {
        self.unlock();
    }
}
