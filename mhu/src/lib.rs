//! Driver for the secure channel of the ARM Juno Message Handling Unit (MHU).
//!
//! The application processor talks to the System Control Processor through a
//! pair of interrupt-status registers, one per direction. Each bit of those
//! registers is a *slot*. A message exchange on a slot goes through four
//! phases, all of them performed while holding the channel-wide lock:
//!
//! ```text
//!   start(slot)   lock the channel, wait until the request bit is clear
//!   send(slot)    ring the doorbell: set the request bit
//!   wait(slot)    poll until the SCP sets the response bit
//!   end(slot)     clear the response bit, unlock the channel
//! ```
//!
//! Every contract violation is fatal. Nothing in the protocol returns an
//! error code.
#![allow(clippy::upper_case_acronyms)]
#![cfg_attr(not(test), no_std)]

pub mod barrier;
pub mod bsp;
pub mod errno;
pub mod macros;
pub mod memory;
pub mod mhu;
pub mod synchronization;

#[doc(hidden)]
pub use log as __log;

pub use mhu::{
    Acked, Direction, Mailbox, Message, Owned, SecureChannel, Sent, Slot, MAX_SLOT_ID,
};
