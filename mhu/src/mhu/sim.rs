//! Software model of the MHU for host tests.
//!
//! Writes to SET/CLEAR update STAT the way the hardware does, and the model can
//! play the SCP side of an exchange.

use super::{slot_mask, Direction, Mailbox, MAX_SLOT_ID};
use spin::relax::RelaxStrategy;
use std::sync::atomic::{AtomicU32, Ordering};

/// Relax strategy for host tests: let the other threads, including the
/// simulated SCP, make progress.
pub struct YieldNow;

impl RelaxStrategy for YieldNow {
    fn relax() {
        std::thread::yield_now();
    }
}

#[derive(Default)]
pub struct SimulatedMhu {
    request: AtomicU32,
    response: AtomicU32,
}

impl SimulatedMhu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hardware state as found after a reset that did not clear STAT.
    pub fn with_request_status(bits: u32) -> Self {
        Self {
            request: AtomicU32::new(bits),
            response: AtomicU32::new(0),
        }
    }

    fn register(&self, direction: Direction) -> &AtomicU32 {
        match direction {
            Direction::Request => &self.request,
            Direction::Response => &self.response,
        }
    }

    /// Acts as the SCP for one command on `slot`: waits for the doorbell,
    /// acknowledges it and posts the response.
    pub fn respond(&self, slot: u32) {
        while !self.is_set(Direction::Request, slot) {
            std::thread::yield_now();
        }
        self.clear_bit(Direction::Request, slot);
        self.set_bit(Direction::Response, slot);
    }

    /// Acts as the SCP for every pending command until `stop` returns true.
    pub fn serve(&self, stop: impl Fn() -> bool) {
        while !stop() {
            let pending = self.status(Direction::Request);
            if pending == 0 {
                std::thread::yield_now();
                continue;
            }
            for slot in (0..=MAX_SLOT_ID).filter(|s| pending & (1 << *s) != 0) {
                self.clear_bit(Direction::Request, slot);
                self.set_bit(Direction::Response, slot);
            }
        }
    }
}

impl Mailbox for SimulatedMhu {
    fn status(&self, direction: Direction) -> u32 {
        self.register(direction).load(Ordering::SeqCst)
    }

    fn set_bit(&self, direction: Direction, slot: u32) {
        self.register(direction)
            .fetch_or(slot_mask(slot), Ordering::SeqCst);
    }

    fn clear_bit(&self, direction: Direction, slot: u32) {
        self.register(direction)
            .fetch_and(!slot_mask(slot), Ordering::SeqCst);
    }
}
