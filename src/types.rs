//! Core types for button state tracking.

/// The trusted, debounced logical level of a button.
///
/// This is never a raw pin reading. It only changes after the raw level has
/// held steady for the configured debounce interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonLevel {
    /// Button is not pressed.
    #[default]
    Released,

    /// Button is pressed.
    Pressed,
}

impl ButtonLevel {
    /// Returns true for [`ButtonLevel::Pressed`].
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == ButtonLevel::Pressed
    }
}

/// A committed transition of the trusted level, reported by a sampling tick.
///
/// Edges are emitted at most once per stable interval: bounce shorter than
/// the debounce interval produces no edge at all, and chatter immediately
/// after a commit only restarts the stability timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Trusted level committed released -> pressed.
    Pressed {
        /// True when this press newly registered the button into the round,
        /// i.e. `playing` flipped from false to true on this very edge.
        /// False for presses while the button is already participating.
        registered: bool,
    },

    /// Trusted level committed pressed -> released.
    ///
    /// Releasing never ends round participation; that is the job of an
    /// explicit round reset.
    Released,
}

impl Edge {
    /// Returns true if this edge is a press (registered or not).
    #[inline]
    pub fn is_press(self) -> bool {
        matches!(self, Edge::Pressed { .. })
    }
}
