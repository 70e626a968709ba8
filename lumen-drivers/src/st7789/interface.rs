//! Command/data framing
//!
//! The DC line tells the controller whether the byte on the wire is an
//! opcode (low) or an operand/pixel (high). Data mode is the rest state:
//! the line is pulled low only for the single opcode byte.

use embedded_hal::delay::DelayNs;
use lumen_core::Rgb565;
use lumen_hal::OutputPin;

use super::transport::BitBangTransport;

/// Framed command/data interface on top of the bit transport
pub struct Interface<P, S> {
    transport: BitBangTransport<P, S>,
    dc: P,
}

impl<P: OutputPin, S: DelayNs> Interface<P, S> {
    /// Wrap a transport; the DC line starts in data mode
    pub fn new(transport: BitBangTransport<P, S>, mut dc: P) -> Self {
        dc.set_high();
        Self { transport, dc }
    }

    /// Send an opcode, then fall back to data mode for its operands
    pub fn send_command(&mut self, opcode: u8) {
        #[cfg(feature = "defmt")]
        defmt::debug!("ST7789 command 0x{=u8:02X}", opcode);

        self.dc.set_low();
        self.transport.send_byte(opcode);
        self.dc.set_high();
    }

    /// Send one operand byte
    pub fn send_data_byte(&mut self, value: u8) {
        self.dc.set_high();
        self.transport.send_byte(value);
    }

    /// Send one operand word (big-endian)
    pub fn send_data_word(&mut self, value: u16) {
        self.dc.set_high();
        self.transport.send_word(value);
    }

    /// Enter data mode ahead of a pixel stream
    #[inline]
    pub fn begin_pixels(&mut self) {
        self.dc.set_high();
    }

    /// Push one pixel of an open stream
    ///
    /// `begin_pixels` must have been called since the last command.
    #[inline(always)]
    pub fn push_color(&mut self, color: Rgb565) {
        self.transport.send_word(color.raw());
    }

    /// Give back the transport and the DC line
    pub fn release(self) -> (BitBangTransport<P, S>, P) {
        (self.transport, self.dc)
    }
}
