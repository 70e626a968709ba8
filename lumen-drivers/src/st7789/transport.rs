//! Bit-serial transport
//!
//! Shifts bytes out on a data line with one explicit clock pulse per bit,
//! most significant bit first. The clock idles high: each bit drives the
//! data line, then pulls the clock low and releases it high, and the panel
//! samples on the rising edge.

use embedded_hal::delay::DelayNs;
use lumen_core::config::TransportTiming;
use lumen_hal::OutputPin;

/// Two-wire bit-banged transport
///
/// Owns only the clock and data lines; framing (the DC line) lives one
/// layer up.
pub struct BitBangTransport<P, S> {
    clock: P,
    data: P,
    /// Blocking delay used for settle time in conservative mode
    settle: S,
    timing: TransportTiming,
}

impl<P: OutputPin, S: DelayNs> BitBangTransport<P, S> {
    /// Create a transport and put both lines at rest (clock high, data low)
    pub fn new(mut clock: P, mut data: P, settle: S, timing: TransportTiming) -> Self {
        clock.set_high();
        data.set_low();
        Self {
            clock,
            data,
            settle,
            timing,
        }
    }

    /// Send one byte, MSB first
    pub fn send_byte(&mut self, value: u8) {
        for bit in (0..8).rev() {
            self.data.set_state(value & (1 << bit) != 0);
            self.settle();
            self.clock.set_low();
            self.settle();
            self.clock.set_high();
            self.settle();
        }
    }

    /// Send a 16-bit word, high byte first
    #[inline]
    pub fn send_word(&mut self, value: u16) {
        let [high, low] = value.to_be_bytes();
        self.send_byte(high);
        self.send_byte(low);
    }

    /// Give back the clock line, data line and settle delay
    pub fn release(self) -> (P, P, S) {
        (self.clock, self.data, self.settle)
    }

    #[inline(always)]
    fn settle(&mut self) {
        if let TransportTiming::Conservative { settle_ns } = self.timing {
            self.settle.delay_ns(settle_ns);
        }
    }
}
