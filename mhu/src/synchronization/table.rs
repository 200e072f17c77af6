use super::LockHandle;
use lock_api::RawMutex;

/// Index of a lock inside a [`LockTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockId(pub usize);

/// Fixed set of platform locks addressed by id.
///
/// Firmware that cannot place lock objects in coherent memory keeps all its
/// locks in one table and hands out ids instead.
pub struct LockTable<R: RawMutex, const N: usize> {
    locks: [R; N],
}

impl<R: RawMutex, const N: usize> LockTable<R, N> {
    pub const fn new() -> Self {
        Self {
            locks: [const { R::INIT }; N],
        }
    }

    /// Handle for the lock `id`.
    ///
    /// An id outside the table is a platform configuration defect.
    pub fn handle(&self, id: LockId) -> TableLock<'_, R, N> {
        crate::fatal_assert!(id.0 < N, "lock id {} outside table of {}", id.0, N);
        TableLock { table: self, id }
    }
}

impl<R: RawMutex, const N: usize> Default for LockTable<R, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`LockHandle`] for one entry of a [`LockTable`].
pub struct TableLock<'a, R: RawMutex, const N: usize> {
    table: &'a LockTable<R, N>,
    id: LockId,
}

impl<R: RawMutex, const N: usize> LockHandle for TableLock<'_, R, N> {
    fn acquire(&self) {
        self.table.locks[self.id.0].lock();
    }

    unsafe fn release(&self) {
        self.table.locks[self.id.0].unlock();
    }
}
