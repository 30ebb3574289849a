//! Adapters for `embedded-hal` digital input pins.
//!
//! Arcade buttons are wired either to ground with a pull-up (active low,
//! the common case) or to the supply rail with a pull-down (active high).
//! These newtypes map an [`InputPin`] onto [`ButtonInput`] with the wiring
//! polarity made explicit, so firmware can hand pins straight to a panel.
//!
//! A pin read error counts as released: the debounce window already absorbs
//! a glitched tick, and [`ButtonInput`] has no failure channel by design.

use crate::button::ButtonInput;
use embedded_hal::digital::InputPin;

/// A button wired active low: pressed pulls the pin to ground.
pub struct ActiveLow<P>(pub P);

impl<P: InputPin> ButtonInput for ActiveLow<P> {
    fn is_pressed(&mut self) -> bool {
        self.0.is_low().unwrap_or(false)
    }
}

/// A button wired active high: pressed pulls the pin to the supply rail.
pub struct ActiveHigh<P>(pub P);

impl<P: InputPin> ButtonInput for ActiveHigh<P> {
    fn is_pressed(&mut self) -> bool {
        self.0.is_high().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    struct FakePin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn active_low_reports_pressed_on_low_pin() {
        let mut input = ActiveLow(FakePin { high: false });
        assert!(input.is_pressed());

        let mut input = ActiveLow(FakePin { high: true });
        assert!(!input.is_pressed());
    }

    #[test]
    fn active_high_reports_pressed_on_high_pin() {
        let mut input = ActiveHigh(FakePin { high: true });
        assert!(input.is_pressed());

        let mut input = ActiveHigh(FakePin { high: false });
        assert!(!input.is_pressed());
    }
}
