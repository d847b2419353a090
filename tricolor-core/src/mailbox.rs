//! One-slot receive mailbox
//!
//! Single producer (the serial receive task), single consumer (the command
//! task). The slot holds at most one unconsumed byte; posting while a byte
//! is pending overwrites it, the same way a UART holding register loses a
//! character that was not read in time. Once the consumer has taken a byte
//! it is out of the slot, so a later post can never disturb the command
//! being applied.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

use crate::state::ReceiveEvent;

/// Latest-value handoff of received bytes
pub struct CommandMailbox<M: RawMutex> {
    slot: Signal<M, ReceiveEvent>,
}

impl<M: RawMutex> CommandMailbox<M> {
    pub const fn new() -> Self {
        Self {
            slot: Signal::new(),
        }
    }

    /// Store a received byte, replacing any byte not yet taken
    pub fn post(&self, byte: u8) {
        self.slot.signal(ReceiveEvent::new(byte));
    }

    /// Wait for the next byte and take it out of the slot
    pub async fn receive(&self) -> ReceiveEvent {
        self.slot.wait().await
    }

    /// Check if a byte is waiting to be taken
    pub fn is_pending(&self) -> bool {
        self.slot.signaled()
    }
}

impl<M: RawMutex> Default for CommandMailbox<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use proptest::prelude::*;

    #[test]
    fn test_empty_mailbox() {
        let mailbox = CommandMailbox::<NoopRawMutex>::new();
        assert!(!mailbox.is_pending());
    }

    #[test]
    fn test_post_then_receive() {
        let mailbox = CommandMailbox::<NoopRawMutex>::new();
        mailbox.post(b'R');
        assert!(mailbox.is_pending());

        let event = block_on(mailbox.receive());
        assert_eq!(event, ReceiveEvent::new(b'R'));
        assert!(!mailbox.is_pending());
    }

    #[test]
    fn test_overrun_keeps_latest() {
        let mailbox = CommandMailbox::<NoopRawMutex>::new();
        mailbox.post(b'R');
        mailbox.post(b'V');
        assert_eq!(block_on(mailbox.receive()), ReceiveEvent::new(b'V'));
        assert!(!mailbox.is_pending());
    }

    #[test]
    fn test_taken_byte_survives_later_post() {
        let mailbox = CommandMailbox::<NoopRawMutex>::new();
        mailbox.post(b'T');
        let taken = block_on(mailbox.receive());

        // A byte arriving while the taken one is applied lands in the slot
        mailbox.post(b'0');
        assert_eq!(taken, ReceiveEvent::new(b'T'));
        assert!(mailbox.is_pending());
        assert_eq!(block_on(mailbox.receive()), ReceiveEvent::new(b'0'));
    }

    proptest! {
        #[test]
        fn test_unconsumed_posts_collapse_to_last(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
            let mailbox = CommandMailbox::<NoopRawMutex>::new();
            for &b in &bytes {
                mailbox.post(b);
            }
            let last = *bytes.last().unwrap();
            prop_assert_eq!(block_on(mailbox.receive()).byte, last);
            prop_assert!(!mailbox.is_pending());
        }
    }
}
