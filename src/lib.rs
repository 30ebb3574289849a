#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Button`**: Debounces one physical button and tracks its player's round participation and score
//! - **`ButtonInput`**: Trait to implement for your input hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`ButtonLevel`**: The trusted, debounced logical level
//! - **`Edge`**: A committed level transition, reported once per stable interval
//! - **`ButtonConfig`** / **`ButtonLayout`**: Owner name and render-layout data carried for display collaborators
//! - **`Panel`**: Maps button identifiers to owned buttons; routes commands and batch-samples every tick
//! - **`ButtonAction`** / **`ButtonCommand`**: Commands that round orchestration sends to buttons
//!
//! Buttons never block and never fail: sampling is a cheap per-tick call in a
//! cooperative polling loop, and round/score operations report no-ops instead
//! of erroring. Rendering (LED strips, score displays) and round rules live
//! outside this crate; it carries their layout data and exposes their read
//! surface, nothing more.

pub mod button;
pub mod command;
pub mod layout;
pub mod panel;
pub mod time;
pub mod types;

#[cfg(feature = "embedded-hal")]
pub mod hal;

pub use button::{Button, ButtonInput};
pub use command::{ButtonAction, ButtonCommand};
pub use layout::{ButtonConfig, ButtonLayout, ConfigError, TextAnchor};
pub use panel::{ButtonId, Panel, PanelError};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ButtonLevel, Edge};

#[cfg(feature = "embedded-hal")]
pub use hal::{ActiveHigh, ActiveLow};

/// Typical settle window for a tactile or arcade switch, in milliseconds.
///
/// A convenience default for [`TimeDuration::from_millis`]; pick your own
/// value if your switches are bouncier.
pub const DEFAULT_DEBOUNCE_MS: u64 = 20;

#[cfg(test)]
mod tests {
    use super::*;

    // Basic compilation tests - actual functionality tests would go here
    #[test]
    fn types_compile() {
        let _ = ButtonLevel::Released;
        let _ = ButtonLevel::Pressed;
        let _ = Edge::Pressed { registered: true };
        let _ = Edge::Released;
        let _ = ButtonAction::Award(1);
        let _ = ButtonAction::ResetRound;
        let _ = ButtonAction::ResetScore;
        let _ = ButtonId(0);
        let _ = DEFAULT_DEBOUNCE_MS;
    }
}
