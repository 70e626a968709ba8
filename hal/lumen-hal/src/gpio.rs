//! GPIO pin abstractions
//!
//! Provides traits for digital output lines and for the pin pool they are
//! allocated from.

/// Digital output pin
///
/// Setting a level cannot fail: once a line has been configured as an
/// output, driving it is a plain register write.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range for this chip
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
}

/// Source of output pins
///
/// Configuration names pins by number; the provider turns a number into an
/// owned, configured output line. Each pin can be handed out once.
pub trait PinProvider {
    /// Output line type produced by this provider
    type Output: OutputPin;

    /// Configure `pin` as an output with the given initial level and take it
    fn take_output(&mut self, pin: u8, initial_high: bool) -> Result<Self::Output, PinError>;
}

impl<T: PinProvider + ?Sized> PinProvider for &mut T {
    type Output = T::Output;

    fn take_output(&mut self, pin: u8, initial_high: bool) -> Result<Self::Output, PinError> {
        T::take_output(self, pin, initial_high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LatchPin {
        high: bool,
    }

    impl OutputPin for LatchPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_set_state() {
        let mut pin = LatchPin { high: false };

        pin.set_state(true);
        assert!(pin.is_set_high());

        pin.set_state(false);
        assert!(pin.is_set_low());
    }
}
