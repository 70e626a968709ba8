//! Host-side wire recorder for driver tests
//!
//! Mock lines share one recorder that decodes the serial stream the way
//! the panel does: one bit per rising clock edge, most significant bit
//! first, with the DC level at the eighth edge deciding between command
//! and data.

use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use lumen_core::config::{PanelConfig, PanelPinConfig, SignalRole};
use lumen_core::Rect;
use lumen_hal::{OutputPin, PinError, PinProvider};

use super::command;
use super::driver::{PanelPins, St7789};

/// One of the five signal lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clock,
    Data,
    Dc,
    Reset,
    Backlight,
}

impl Line {
    fn for_role(role: SignalRole) -> Self {
        match role {
            SignalRole::Clock => Line::Clock,
            SignalRole::Data => Line::Data,
            SignalRole::DataCommand => Line::Dc,
            SignalRole::Reset => Line::Reset,
            SignalRole::Backlight => Line::Backlight,
        }
    }
}

/// Something the panel would have observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireEvent {
    /// Byte clocked in with DC low
    Command(u8),
    /// Byte clocked in with DC high
    Data(u8),
    /// Async wait, in milliseconds
    Wait(u32),
    /// Reset line changed level
    Reset(bool),
    /// Backlight line changed level
    Backlight(bool),
}

#[derive(Default)]
struct WireState {
    levels: [bool; 5],
    writes: [usize; 5],
    shift: u8,
    bits: u8,
    events: Vec<WireEvent>,
    dc_glitches: usize,
    settles: usize,
    last_settle_ns: Option<u32>,
}

impl WireState {
    fn drive(&mut self, line: Line, level: bool) {
        let idx = line as usize;
        let previous = self.levels[idx];
        self.levels[idx] = level;
        self.writes[idx] += 1;

        match line {
            Line::Clock if !previous && level => {
                self.shift = (self.shift << 1) | u8::from(self.levels[Line::Data as usize]);
                self.bits += 1;
                if self.bits == 8 {
                    let byte = self.shift;
                    let event = if self.levels[Line::Dc as usize] {
                        WireEvent::Data(byte)
                    } else {
                        WireEvent::Command(byte)
                    };
                    self.events.push(event);
                    self.shift = 0;
                    self.bits = 0;
                }
            }
            Line::Dc if previous != level && self.bits != 0 => self.dc_glitches += 1,
            Line::Reset if previous != level => self.events.push(WireEvent::Reset(level)),
            Line::Backlight if previous != level => self.events.push(WireEvent::Backlight(level)),
            _ => {}
        }
    }
}

/// Shared recorder for a set of mock lines
#[derive(Clone, Default)]
pub struct Wire {
    state: Rc<RefCell<WireState>>,
}

impl Wire {
    /// All lines low
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines low except DC, so clocked bytes decode as data
    pub fn with_data_mode() -> Self {
        let wire = Self::new();
        wire.state.borrow_mut().levels[Line::Dc as usize] = true;
        wire
    }

    /// Mock line starting at `initial` without recording an edge
    pub fn pin(&self, line: Line, initial: bool) -> MockPin {
        self.state.borrow_mut().levels[line as usize] = initial;
        MockPin {
            line,
            wire: self.clone(),
        }
    }

    /// All five lines at their rest levels
    pub fn pins(&self) -> PanelPins<MockPin> {
        PanelPins {
            clock: self.pin(Line::Clock, true),
            data: self.pin(Line::Data, false),
            dc: self.pin(Line::Dc, true),
            reset: self.pin(Line::Reset, true),
            backlight: self.pin(Line::Backlight, true),
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay { wire: self.clone() }
    }

    pub fn settle(&self) -> SettleCounter {
        SettleCounter { wire: self.clone() }
    }

    /// Forget everything recorded so far; line levels are kept
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.events.clear();
        state.writes = [0; 5];
        state.dc_glitches = 0;
        state.settles = 0;
        state.last_settle_ns = None;
    }

    pub fn events(&self) -> Vec<WireEvent> {
        self.state.borrow().events.clone()
    }

    /// Clocked bytes only
    pub fn bytes(&self) -> Vec<WireEvent> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, WireEvent::Command(_) | WireEvent::Data(_)))
            .collect()
    }

    /// Opcodes in the order they were sent
    pub fn commands(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                WireEvent::Command(op) => Some(op),
                _ => None,
            })
            .collect()
    }

    /// First `count` data bytes following the first `opcode`
    pub fn data_after(&self, opcode: u8, count: usize) -> Vec<u8> {
        self.events()
            .into_iter()
            .skip_while(|e| *e != WireEvent::Command(opcode))
            .skip(1)
            .map_while(|e| match e {
                WireEvent::Data(b) => Some(b),
                _ => None,
            })
            .take(count)
            .collect()
    }

    pub fn level(&self, line: Line) -> bool {
        self.state.borrow().levels[line as usize]
    }

    /// DC edges seen while a byte was partly clocked
    pub fn dc_glitches(&self) -> usize {
        self.state.borrow().dc_glitches
    }

    /// Bits clocked since the last complete byte
    pub fn pending_bits(&self) -> u8 {
        self.state.borrow().bits
    }

    pub fn settles(&self) -> usize {
        self.state.borrow().settles
    }

    pub fn last_settle_ns(&self) -> Option<u32> {
        self.state.borrow().last_settle_ns
    }

    pub fn writes_to(&self, line: Line) -> usize {
        self.state.borrow().writes[line as usize]
    }

    /// Total writes across all lines
    pub fn pin_writes(&self) -> usize {
        self.state.borrow().writes.iter().sum()
    }

    fn push(&self, event: WireEvent) {
        self.state.borrow_mut().events.push(event);
    }
}

/// Output line that reports to a `Wire`
pub struct MockPin {
    line: Line,
    wire: Wire,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.wire.state.borrow_mut().drive(self.line, true);
    }

    fn set_low(&mut self) {
        self.wire.state.borrow_mut().drive(self.line, false);
    }

    fn is_set_high(&self) -> bool {
        self.wire.level(self.line)
    }
}

/// Async delay that records a `Wait` and returns immediately
pub struct MockDelay {
    wire: Wire,
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.wire.push(WireEvent::Wait(ns.div_ceil(1_000_000)));
    }

    async fn delay_us(&mut self, us: u32) {
        self.wire.push(WireEvent::Wait(us.div_ceil(1_000)));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.wire.push(WireEvent::Wait(ms));
    }
}

/// Blocking delay that counts settle calls
pub struct SettleCounter {
    wire: Wire,
}

impl embedded_hal::delay::DelayNs for SettleCounter {
    fn delay_ns(&mut self, ns: u32) {
        let mut state = self.wire.state.borrow_mut();
        state.settles += 1;
        state.last_settle_ns = Some(ns);
    }
}

/// Pin pool backed by a `Wire`
///
/// Pins named in the wiring map to their line; any other number, or one
/// marked unavailable, is rejected.
pub struct MockBank {
    wire: Wire,
    pins: PanelPinConfig,
    taken: Vec<u8>,
    unavailable: Vec<u8>,
}

impl MockBank {
    pub fn new(wire: &Wire, pins: PanelPinConfig) -> Self {
        Self {
            wire: wire.clone(),
            pins,
            taken: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// Reject `pin` as if the chip did not have it
    pub fn without(mut self, pin: u8) -> Self {
        self.unavailable.push(pin);
        self
    }

    /// Pins handed out so far, in order
    pub fn taken(&self) -> &[u8] {
        &self.taken
    }
}

impl PinProvider for MockBank {
    type Output = MockPin;

    fn take_output(&mut self, pin: u8, initial_high: bool) -> Result<MockPin, PinError> {
        if self.unavailable.contains(&pin) {
            return Err(PinError::InvalidPin);
        }
        if self.taken.contains(&pin) {
            return Err(PinError::AlreadyTaken);
        }
        let (role, _) = self
            .pins
            .roles()
            .into_iter()
            .find(|&(_, p)| p == pin)
            .ok_or(PinError::InvalidPin)?;

        self.taken.push(pin);
        Ok(self.wire.pin(Line::for_role(role), initial_high))
    }
}

/// Driver on mock lines at rest, with construction writes forgotten
pub fn test_panel(wire: &Wire, config: PanelConfig) -> St7789<MockPin, SettleCounter> {
    let panel = St7789::from_pins(wire.pins(), config, wire.settle());
    wire.clear();
    panel
}

/// One addressing window and the pixel words streamed into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowWrite {
    pub rect: Rect,
    pub words: Vec<u16>,
}

/// Split a recording into window writes
///
/// A write starts at CASET and needs RASET and RAMWR to follow with their
/// operands; data bytes after RAMWR are paired into words until the next
/// non-data event.
pub fn windows(events: &[WireEvent]) -> Vec<WindowWrite> {
    let mut out = Vec::new();
    let mut i = 0;

    let operands = |at: usize| -> Option<(u16, u16)> {
        let mut b = [0u8; 4];
        for (k, slot) in b.iter_mut().enumerate() {
            match events.get(at + k) {
                Some(WireEvent::Data(v)) => *slot = *v,
                _ => return None,
            }
        }
        Some((
            u16::from_be_bytes([b[0], b[1]]),
            u16::from_be_bytes([b[2], b[3]]),
        ))
    };

    while i < events.len() {
        if events[i] != WireEvent::Command(command::CASET) {
            i += 1;
            continue;
        }
        let raset = events.get(i + 5) == Some(&WireEvent::Command(command::RASET));
        let ramwr = events.get(i + 10) == Some(&WireEvent::Command(command::RAMWR));
        let (Some((x0, x1)), Some((y0, y1))) = (operands(i + 1), operands(i + 6)) else {
            i += 1;
            continue;
        };
        if !(raset && ramwr) {
            i += 1;
            continue;
        }

        i += 11;
        let mut bytes = Vec::new();
        while let Some(WireEvent::Data(b)) = events.get(i) {
            bytes.push(*b);
            i += 1;
        }
        let words = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();

        out.push(WindowWrite {
            rect: Rect::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1),
            words,
        });
    }

    out
}

/// Drive a future to completion, counting how often it returned `Pending`
pub fn count_yields<F: Future>(fut: F) -> (F::Output, usize) {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    let mut yields = 0;
    loop {
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(out) => return (out, yields),
            Poll::Pending => yields += 1,
        }
    }
}
