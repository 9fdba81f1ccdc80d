#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tm1637_gpio::{Config, PinBackend, PinMode, Tm1637};

pub const CLK: u8 = 23;
pub const DIO: u8 = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Mode(u8, PinMode),
    Settle(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

/// Records every mode change. Fails once `fail_after` changes went through.
pub struct MockPins {
    pub log: Log,
    pub fail_after: Option<usize>,
    count: usize,
}

impl MockPins {
    pub fn new(log: Log, fail_after: Option<usize>) -> Self {
        Self {
            log,
            fail_after,
            count: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockPinError;

impl PinBackend for MockPins {
    type Error = MockPinError;

    fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Self::Error> {
        if self.fail_after == Some(self.count) {
            return Err(MockPinError);
        }
        self.count += 1;
        self.log.borrow_mut().push(Event::Mode(pin, mode));
        Ok(())
    }
}

pub struct MockDelay {
    pub log: Log,
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Settle(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::Settle(us));
    }
}

pub fn display(config: &Config) -> (Tm1637<MockPins, MockDelay>, Log) {
    failing_display(config, None)
}

pub fn failing_display(
    config: &Config,
    fail_after: Option<usize>,
) -> (Tm1637<MockPins, MockDelay>, Log) {
    let log = Log::default();
    let pins = MockPins::new(log.clone(), fail_after);
    let delay = MockDelay { log: log.clone() };
    let display = Tm1637::new(pins, delay, config).expect("valid config");
    log.borrow_mut().clear();
    (display, log)
}

/// Replays recorded transitions on two pulled-up lines and returns the bytes
/// of each start..stop transaction.
///
/// Data changing while the clock is high is a start (falling) or stop
/// (rising). Each byte is eight rising clock edges sampled LSB first plus a
/// ninth ack edge. The only other edge allowed in a transaction is the clock
/// release inside the stop condition.
pub fn decode(events: &[Event]) -> Vec<Vec<u8>> {
    let mut clk_high = true;
    let mut dio_high = true;
    let mut transactions = Vec::new();
    let mut current: Option<Vec<u8>> = None;
    let mut edges = 0;
    let mut byte = 0u8;

    for event in events {
        let Event::Mode(pin, mode) = *event else {
            continue;
        };
        let high = mode == PinMode::Input;
        if pin == CLK {
            if !clk_high && high {
                assert!(current.is_some(), "clock pulse outside a transaction");
                edges += 1;
                if edges <= 8 {
                    if dio_high {
                        byte |= 1 << (edges - 1);
                    }
                } else {
                    current.as_mut().unwrap().push(byte);
                    byte = 0;
                    edges = 0;
                }
            }
            clk_high = high;
        } else if pin == DIO {
            if clk_high && dio_high && !high {
                assert!(current.is_none(), "start inside a transaction");
                current = Some(Vec::new());
                edges = 0;
                byte = 0;
            } else if clk_high && !dio_high && high {
                assert_eq!(edges, 1, "stop must follow a complete byte");
                transactions.push(current.take().expect("stop without start"));
                edges = 0;
                byte = 0;
            }
            dio_high = high;
        } else {
            panic!("unexpected pin {pin}");
        }
    }
    assert!(current.is_none(), "unterminated transaction");
    assert!(clk_high && dio_high, "lines not idle after update");
    transactions
}

pub fn mode_changes(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, Event::Mode(..)))
        .count()
}
