use core::{marker::PhantomData, ops::Deref};

/// Typed view of a memory-mapped register block starting at `start_addr`.
///
/// The wrapper only stores the address; every access goes straight to the
/// device through the register types of `T`.
pub struct MMIOWrapper<T> {
    start_addr: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MMIOWrapper<T> {
    /// # Safety
    ///
    /// `start_addr` must be the address of a live, suitably aligned `T` for
    /// as long as the wrapper exists, and no other wrapper may alias it.
    pub const unsafe fn new(start_addr: usize) -> Self {
        Self {
            start_addr,
            _marker: PhantomData,
        }
    }
}

impl<T> Deref for MMIOWrapper<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        unsafe { &*(self.start_addr as *const _) }
    }
}
