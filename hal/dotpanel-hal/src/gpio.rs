//! GPIO pin abstractions
//!
//! Panel interfaces only drive pins: data/command select, chip select and
//! reset. Pin writes on the supported chips cannot fail, so the trait is
//! infallible.

/// Digital output pin
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
}

/// Placeholder for an unconnected optional pin
///
/// Used for panels wired without a reset line, or with chip select tied
/// low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin;

impl OutputPin for NoPin {
    fn set_high(&mut self) {}

    fn set_low(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        high: bool,
        writes: usize,
    }

    impl OutputPin for Recorder {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }
    }

    #[test]
    fn test_set_state_dispatches() {
        let mut pin = Recorder {
            high: false,
            writes: 0,
        };
        pin.set_state(true);
        assert!(pin.high);
        pin.set_state(false);
        assert!(!pin.high);
        assert_eq!(pin.writes, 2);
    }
}
