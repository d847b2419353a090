//! Command handler
//!
//! Sole owner and writer of the indicator outputs. Each received byte is
//! applied in one synchronous call: clear every output, then assert the
//! outputs selected by the command. The call has no suspension point, so
//! nothing can observe or interleave with a half-applied command.

use crate::state::{IndicatorState, Line, ReceiveEvent, LINE_COUNT};
use crate::traits::IndicatorOutput;

/// Drives three indicators from received command bytes
pub struct CommandHandler<O> {
    outputs: [O; LINE_COUNT],
    state: IndicatorState,
}

impl<O: IndicatorOutput> CommandHandler<O> {
    /// Take ownership of the red, green and blue outputs and switch them off
    pub fn new(outputs: [O; LINE_COUNT]) -> Self {
        let mut handler = Self {
            outputs,
            state: IndicatorState::OFF,
        };
        handler.clear();
        handler
    }

    /// Apply one received byte
    pub fn handle(&mut self, event: ReceiveEvent) {
        let next = IndicatorState::for_command(event.command());

        self.clear();
        for line in Line::ALL {
            if next.is_on(line) {
                self.outputs[line.index()].set_on(true);
            }
        }
        self.state = next;
    }

    /// Current logical state of the outputs
    pub fn state(&self) -> IndicatorState {
        self.state
    }

    /// Borrow the output for `line`
    pub fn output(&self, line: Line) -> &O {
        &self.outputs[line.index()]
    }

    fn clear(&mut self) {
        for output in self.outputs.iter_mut() {
            output.set_on(false);
        }
        self.state = IndicatorState::OFF;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;
    use proptest::prelude::*;

    type WriteLog = RefCell<Vec<(usize, bool), 64>>;

    /// Mock indicator that records every write into a shared log
    struct MockIndicator<'a> {
        id: usize,
        on: bool,
        log: &'a WriteLog,
    }

    impl IndicatorOutput for MockIndicator<'_> {
        fn set_on(&mut self, on: bool) {
            self.on = on;
            let _ = self.log.borrow_mut().push((self.id, on));
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    /// Start every mock lit so a missing clear would show up
    fn handler(log: &WriteLog) -> CommandHandler<MockIndicator<'_>> {
        CommandHandler::new([0, 1, 2].map(|id| MockIndicator { id, on: true, log }))
    }

    fn lit(h: &CommandHandler<MockIndicator<'_>>) -> (bool, bool, bool) {
        (
            h.output(Line::Red).is_on(),
            h.output(Line::Green).is_on(),
            h.output(Line::Blue).is_on(),
        )
    }

    fn send(h: &mut CommandHandler<MockIndicator<'_>>, bytes: &[u8]) {
        for &b in bytes {
            h.handle(ReceiveEvent::new(b));
        }
    }

    #[test]
    fn test_off_after_init() {
        let log = WriteLog::default();
        let h = handler(&log);
        assert_eq!(lit(&h), (false, false, false));
        assert_eq!(h.state(), IndicatorState::OFF);
    }

    #[test]
    fn test_red() {
        let log = WriteLog::default();
        let mut h = handler(&log);
        send(&mut h, b"R");
        assert_eq!(lit(&h), (true, false, false));
    }

    #[test]
    fn test_all_on() {
        let log = WriteLog::default();
        let mut h = handler(&log);
        send(&mut h, b"T");
        assert_eq!(lit(&h), (true, true, true));
    }

    #[test]
    fn test_all_on_then_off() {
        let log = WriteLog::default();
        let mut h = handler(&log);
        send(&mut h, b"T0");
        assert_eq!(lit(&h), (false, false, false));
    }

    #[test]
    fn test_unrecognized_byte() {
        let log = WriteLog::default();
        let mut h = handler(&log);
        send(&mut h, b"AX");
        assert_eq!(lit(&h), (false, false, false));
    }

    #[test]
    fn test_commands_replace_not_accumulate() {
        let log = WriteLog::default();
        let mut h = handler(&log);
        send(&mut h, b"RV");
        assert_eq!(lit(&h), (false, true, false));
    }

    #[test]
    fn test_off_twice_same_as_once() {
        let log = WriteLog::default();
        let mut once = handler(&log);
        send(&mut once, b"T0");

        let log2 = WriteLog::default();
        let mut twice = handler(&log2);
        send(&mut twice, b"T00");

        assert_eq!(lit(&once), lit(&twice));
        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_clear_precedes_assert() {
        let log = WriteLog::default();
        let mut h = handler(&log);
        send(&mut h, b"T");
        log.borrow_mut().clear();

        send(&mut h, b"A");
        let writes = log.borrow();
        assert_eq!(
            writes.as_slice(),
            &[(0, false), (1, false), (2, false), (2, true)]
        );
    }

    fn arb_history() -> impl Strategy<Value = std::vec::Vec<u8>> {
        prop::collection::vec(any::<u8>(), 0..16)
    }

    proptest! {
        #[test]
        fn test_result_depends_only_on_last_byte(history in arb_history(), last in any::<u8>()) {
            let log = WriteLog::default();
            let mut with_history = handler(&log);
            for &b in &history {
                with_history.handle(ReceiveEvent::new(b));
                log.borrow_mut().clear();
            }
            with_history.handle(ReceiveEvent::new(last));

            let log2 = WriteLog::default();
            let mut fresh = handler(&log2);
            fresh.handle(ReceiveEvent::new(last));

            prop_assert_eq!(lit(&with_history), lit(&fresh));
            prop_assert_eq!(with_history.state(), fresh.state());
        }

        #[test]
        fn test_unrecognized_bytes_clear_everything(byte in any::<u8>()) {
            prop_assume!(!b"RVAT0".contains(&byte));
            let log = WriteLog::default();
            let mut h = handler(&log);
            h.handle(ReceiveEvent::new(b'T'));
            h.handle(ReceiveEvent::new(byte));
            prop_assert_eq!(lit(&h), (false, false, false));
        }

        #[test]
        fn test_never_exactly_two_lit(bytes in arb_history()) {
            let log = WriteLog::default();
            let mut h = handler(&log);
            for &b in &bytes {
                h.handle(ReceiveEvent::new(b));
                log.borrow_mut().clear();
                let (r, g, bl) = lit(&h);
                let count = [r, g, bl].iter().filter(|&&on| on).count();
                prop_assert!(count != 2);
                prop_assert_eq!(count, h.state().lit_count());
            }
        }
    }
}
