//! Handshake phases as types.
//!
//! Each step consumes the message and returns it in the next phase, so a
//! message cannot be sent twice, waited for before it was sent or ended before
//! its response arrived.

use super::{Mailbox, SecureChannel, Slot};
use crate::synchronization::LockHandle;
use core::marker::PhantomData;
use spin::relax::RelaxStrategy;

/// Channel locked, request bit clear.
pub struct Owned;
/// Doorbell rung.
pub struct Sent;
/// Response posted by the SCP.
pub struct Acked;

/// A message in flight on one slot of a [`SecureChannel`].
///
/// Dropping it without reaching [`Message::end`] leaves the channel locked.
#[must_use = "a started message holds the channel lock until it is ended"]
pub struct Message<'a, M, L, R, S> {
    channel: &'a SecureChannel<M, L, R>,
    slot: Slot,
    _phase: PhantomData<S>,
}

impl<'a, M, L, R, S> Message<'a, M, L, R, S> {
    pub fn slot(&self) -> Slot {
        self.slot
    }

    fn advance<T>(self) -> Message<'a, M, L, R, T> {
        Message {
            channel: self.channel,
            slot: self.slot,
            _phase: PhantomData,
        }
    }
}

impl<'a, M: Mailbox, L: LockHandle, R: RelaxStrategy> Message<'a, M, L, R, Owned> {
    pub(super) fn new(channel: &'a SecureChannel<M, L, R>, slot: Slot) -> Self {
        Self {
            channel,
            slot,
            _phase: PhantomData,
        }
    }

    pub fn send(self) -> Message<'a, M, L, R, Sent> {
        self.channel.send(self.slot.id());
        self.advance()
    }
}

impl<'a, M: Mailbox, L: LockHandle, R: RelaxStrategy> Message<'a, M, L, R, Sent> {
    pub fn wait(self) -> Message<'a, M, L, R, Acked> {
        self.channel.wait(self.slot.id());
        self.advance()
    }
}

impl<M: Mailbox, L: LockHandle, R: RelaxStrategy> Message<'_, M, L, R, Acked> {
    /// Consumes the response and unlocks the channel.
    pub fn end(self) {
        self.channel.end(self.slot.id());
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        mhu::sim::{SimulatedMhu, YieldNow},
        synchronization::RawSpinlock,
        Direction, Mailbox, SecureChannel, Slot,
    };
    use lock_api::RawMutex;
    use std::thread;

    #[test]
    fn phases_follow_the_hardware() {
        let sim = SimulatedMhu::new();
        let channel: SecureChannel<_, RawSpinlock<YieldNow>, YieldNow> =
            SecureChannel::new(&sim, RawSpinlock::INIT);
        channel.secure_init();
        let slot = Slot::new(9).unwrap();

        let message = channel.begin(slot);
        assert_eq!(message.slot(), slot);
        assert_eq!(sim.status(Direction::Request), 0);

        let message = message.send();
        assert_eq!(sim.status(Direction::Request), slot.mask());

        thread::scope(|s| {
            s.spawn(|| sim.respond(9));
            let message = message.wait();
            assert!(sim.is_set(Direction::Response, 9));
            message.end();
        });
        assert_eq!(sim.status(Direction::Response), 0);
    }

    #[test]
    fn channel_is_reusable_after_end() {
        let sim = SimulatedMhu::new();
        let channel: SecureChannel<_, RawSpinlock<YieldNow>, YieldNow> =
            SecureChannel::new(&sim, RawSpinlock::INIT);
        channel.secure_init();

        thread::scope(|s| {
            s.spawn(|| {
                sim.respond(1);
                sim.respond(1);
                sim.respond(2);
            });
            for id in [1, 1, 2] {
                channel.exchange(Slot::new(id).unwrap());
            }
        });
        assert_eq!(sim.status(Direction::Request), 0);
        assert_eq!(sim.status(Direction::Response), 0);
    }
}
