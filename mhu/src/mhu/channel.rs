use super::{
    message::{Message, Owned},
    poll::poll_until,
    slot_mask, Direction, Mailbox, Slot,
};
use crate::{barrier, debug_fatal_assert, fatal_assert, synchronization::LockHandle};
use core::{
    marker::PhantomData,
    sync::atomic::{AtomicU32, AtomicU8, Ordering},
};
use log::{debug, trace};
use spin::relax::{RelaxStrategy, Spin};

const NO_OWNER: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Phase {
    Idle = 0,
    Owned = 1,
    Sent = 2,
    Acked = 3,
}

impl Phase {
    fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Phase::Owned,
            2 => Phase::Sent,
            3 => Phase::Acked,
            _ => Phase::Idle,
        }
    }
}

/// The secure channel pair of an MHU together with the lock serializing its
/// users.
///
/// One instance per physical channel, created once and shared by reference.
/// `M` performs the register accesses, `L` provides mutual exclusion across
/// cores and `R` decides how the busy-waits spin.
///
/// Every message goes through `start`, `send`, `wait` and `end` on the same
/// slot, in that order and from the same execution context. Leaving out `end`
/// keeps the channel locked forever. Calling `end` before `wait` returned is
/// a contract violation: the response bit would stay set and corrupt the next
/// exchange on that slot.
pub struct SecureChannel<M, L, R = Spin> {
    mailbox: M,
    lock: L,
    owner: AtomicU32,
    phase: AtomicU8,
    _relax: PhantomData<fn() -> R>,
}

impl<M: Mailbox, L: LockHandle, R: RelaxStrategy> SecureChannel<M, L, R> {
    pub const fn new(mailbox: M, lock: L) -> Self {
        Self {
            mailbox,
            lock,
            owner: AtomicU32::new(NO_OWNER),
            phase: AtomicU8::new(Phase::Idle as u8),
            _relax: PhantomData,
        }
    }

    pub fn mailbox(&self) -> &M {
        &self.mailbox
    }

    /// Prepares the lock and checks that no request is pending.
    ///
    /// STAT resets to zero. Anything else would be taken for a command that
    /// was already sent, so the channel refuses to run on it.
    pub fn secure_init(&self) {
        self.lock.init();

        let status = self.mailbox.status(Direction::Request);
        fatal_assert!(
            status == 0,
            "MHU request status is {:#010x} at init, expected 0",
            status
        );
        debug!("MHU secure channel initialized");
    }

    /// Takes the channel for a message on `slot`.
    ///
    /// Blocks until the lock is free, then until the SCP picked up the
    /// previous command on this slot.
    pub fn start(&self, slot: u32) {
        let mask = slot_mask(slot);

        self.lock.acquire();
        poll_until::<R>(|| self.mailbox.status(Direction::Request) & mask == 0);

        self.owner.store(slot, Ordering::Relaxed);
        self.set_phase(Phase::Owned);
        trace!("MHU slot {} owned", slot);
    }

    /// Rings the doorbell for `slot`. Does not wait for the response.
    pub fn send(&self, slot: u32) {
        let mask = slot_mask(slot);
        self.check_phase(slot, Phase::Owned, "send");

        let status = self.mailbox.status(Direction::Request);
        fatal_assert!(
            status & mask == 0,
            "send on slot {} while the previous command is pending",
            slot
        );

        barrier::write_barrier();
        self.mailbox.set_bit(Direction::Request, slot);
        self.set_phase(Phase::Sent);
        trace!("MHU slot {} sent", slot);
    }

    /// Blocks until the SCP posted its response on `slot`.
    pub fn wait(&self, slot: u32) {
        let mask = slot_mask(slot);
        self.check_phase(slot, Phase::Sent, "wait");

        poll_until::<R>(|| self.mailbox.status(Direction::Response) & mask != 0);

        self.set_phase(Phase::Acked);
        trace!("MHU slot {} acked", slot);
    }

    /// Consumes the response on `slot` and gives the channel back.
    pub fn end(&self, slot: u32) {
        slot_mask(slot);
        // Always checked: releasing a lock this caller does not hold would
        // let another caller's exchange interleave with the next one.
        fatal_assert!(
            self.in_phase(slot, Phase::Acked),
            "end on slot {} out of order: channel owner {:?} in phase {:?}",
            slot,
            self.owner(),
            self.phase()
        );

        self.mailbox.clear_bit(Direction::Response, slot);

        self.owner.store(NO_OWNER, Ordering::Relaxed);
        self.set_phase(Phase::Idle);
        trace!("MHU slot {} released", slot);
        // SAFETY: the assertion above established that this message went
        // through `start`, which acquired the lock.
        unsafe { self.lock.release() };
    }

    /// Starts a message on `slot`. The returned value only offers the next
    /// legal step of the handshake.
    #[must_use = "a started message holds the channel lock until it is ended"]
    pub fn begin(&self, slot: Slot) -> Message<'_, M, L, R, Owned> {
        self.start(slot.id());
        Message::new(self, slot)
    }

    /// Runs a complete handshake on `slot`.
    pub fn exchange(&self, slot: Slot) {
        self.begin(slot).send().wait().end();
    }

    fn set_phase(&self, phase: Phase) {
        self.phase.store(phase as u8, Ordering::Relaxed);
    }

    fn in_phase(&self, slot: u32, expected: Phase) -> bool {
        self.owner.load(Ordering::Relaxed) == slot && self.phase() == expected
    }

    fn check_phase(&self, slot: u32, expected: Phase, op: &str) {
        debug_fatal_assert!(
            self.in_phase(slot, expected),
            "{} on slot {} out of order: channel owner {:?} in phase {:?}",
            op,
            slot,
            self.owner(),
            self.phase()
        );
    }

    fn phase(&self) -> Phase {
        Phase::from_raw(self.phase.load(Ordering::Relaxed))
    }

    fn owner(&self) -> Option<u32> {
        match self.owner.load(Ordering::Relaxed) {
            NO_OWNER => None,
            slot => Some(slot),
        }
    }
}
