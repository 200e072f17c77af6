//! Generic MHU channel protocol.
//!
//! Nothing in here knows where the registers live. Board code supplies a
//! [`Mailbox`] and a [`crate::synchronization::LockHandle`] and gets a
//! [`SecureChannel`] back.

mod channel;
mod message;
pub mod poll;

#[cfg(test)]
pub(crate) mod sim;

pub use channel::SecureChannel;
pub use message::{Acked, Message, Owned, Sent};

use crate::errno::{ErrorCode, EINVAL};
use core::fmt;

/// Highest usable slot.
///
/// Bit 31 of the status registers is set by the hardware on a non-secure
/// access attempt, so only bits `[30:0]` carry messages.
pub const MAX_SLOT_ID: u32 = 30;

/// Which of the two status registers an access targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Requester (CPU) to responder (SCP). Bits are set by `send` and cleared
    /// by the SCP once it picked the command up.
    Request,
    /// Responder (SCP) to requester (CPU). Bits are set by the SCP and cleared
    /// by `end`.
    Response,
}

/// Bit level access to the status/set/clear register triplets.
///
/// Every call is exactly one 32-bit device access.
pub trait Mailbox {
    fn status(&self, direction: Direction) -> u32;

    fn set_bit(&self, direction: Direction, slot: u32);

    fn clear_bit(&self, direction: Direction, slot: u32);

    fn is_set(&self, direction: Direction, slot: u32) -> bool {
        self.status(direction) & slot_mask(slot) != 0
    }
}

impl<T: Mailbox + ?Sized> Mailbox for &T {
    fn status(&self, direction: Direction) -> u32 {
        (**self).status(direction)
    }

    fn set_bit(&self, direction: Direction, slot: u32) {
        (**self).set_bit(direction, slot)
    }

    fn clear_bit(&self, direction: Direction, slot: u32) {
        (**self).clear_bit(direction, slot)
    }

    fn is_set(&self, direction: Direction, slot: u32) -> bool {
        (**self).is_set(direction, slot)
    }
}

/// Register bit for `slot`. Halts on a slot the protocol may not use.
#[inline]
pub(crate) fn slot_mask(slot: u32) -> u32 {
    crate::fatal_assert!(
        slot <= MAX_SLOT_ID,
        "slot {} exceeds maximum slot id {}",
        slot,
        MAX_SLOT_ID
    );
    1 << slot
}

/// A slot id known to be within `[0, MAX_SLOT_ID]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(u32);

impl Slot {
    pub fn new(id: u32) -> Result<Self, ErrorCode> {
        if id > MAX_SLOT_ID {
            return Err(EINVAL);
        }
        Ok(Self(id))
    }

    pub const fn id(self) -> u32 {
        self.0
    }

    pub const fn mask(self) -> u32 {
        1 << self.0
    }
}

impl TryFrom<u32> for Slot {
    type Error = ErrorCode;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<Slot> for u32 {
    fn from(slot: Slot) -> u32 {
        slot.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}
