//! Recording fake of the 3-wire bus: every pin transition lands in a
//! shared event log so tests can replay what would have reached the
//! chip, and scripted levels can be fed back through DIO for key scans.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Stb,
    Clk,
    Dio,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    Read(bool),
}

#[derive(Default)]
struct BusState {
    events: Vec<Event>,
    dio_input: VecDeque<bool>,
}

#[derive(Clone, Default)]
pub struct Bus(Rc<RefCell<BusState>>);

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self, line: Line) -> Pin {
        Pin {
            bus: self.0.clone(),
            line,
        }
    }

    /// Scripts the levels DIO will report, one bit per sample in the
    /// order the driver reads them (least significant bit of each byte
    /// first). An exhausted script reads as high, like a pulled-up
    /// idle line.
    pub fn feed_read_bytes(&self, bytes: &[u8]) {
        let mut state = self.0.borrow_mut();
        for &byte in bytes {
            for bit in 0..8 {
                state.dio_input.push_back(byte & (1 << bit) != 0);
            }
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear_events(&self) {
        self.0.borrow_mut().events.clear();
    }
}

pub struct Pin {
    bus: Rc<RefCell<BusState>>,
    line: Line,
}

impl ErrorType for Pin {
    type Error = Infallible;
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bus.borrow_mut().events.push(Event::Set(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bus.borrow_mut().events.push(Event::Set(self.line, true));
        Ok(())
    }
}

impl InputPin for Pin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let mut state = self.bus.borrow_mut();
        let level = state.dio_input.pop_front().unwrap_or(true);
        state.events.push(Event::Read(level));
        Ok(level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|level| !level)
    }
}

pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Splits the event log into strobe-framed transactions, dropping
/// anything outside a frame.
pub fn transactions(events: &[Event]) -> Vec<Vec<Event>> {
    let mut out = Vec::new();
    let mut current: Option<Vec<Event>> = None;
    for &event in events {
        match event {
            Event::Set(Line::Stb, false) => current = Some(Vec::new()),
            Event::Set(Line::Stb, true) => {
                if let Some(transaction) = current.take() {
                    out.push(transaction);
                }
            }
            _ => {
                if let Some(transaction) = current.as_mut() {
                    transaction.push(event);
                }
            }
        }
    }
    out
}

/// DIO output level latched at each rising clock edge, in wire order.
pub fn clocked_bits(events: &[Event]) -> Vec<bool> {
    let mut bits = Vec::new();
    let mut dio = true;
    for &event in events {
        match event {
            Event::Set(Line::Dio, level) => dio = level,
            Event::Set(Line::Clk, true) => bits.push(dio),
            _ => {}
        }
    }
    bits
}

pub fn byte_from_bits(bits: &[bool]) -> u8 {
    assert_eq!(bits.len(), 8);
    bits.iter()
        .rev()
        .fold(0, |value, &bit| value << 1 | bit as u8)
}

pub fn word_from_bits(bits: &[bool]) -> u16 {
    assert_eq!(bits.len(), 16);
    bits.iter()
        .rev()
        .fold(0, |value, &bit| value << 1 | bit as u16)
}

/// The seven 16-bit grid words of an address-set transaction, skipping
/// the leading command byte.
pub fn matrix_words(transaction: &[Event]) -> Vec<u16> {
    let bits = clocked_bits(transaction);
    assert_eq!(bits.len(), 8 + 16 * 7);
    bits[8..]
        .chunks(16)
        .map(word_from_bits)
        .collect()
}
