//! Button debounce and scoring state machine.
//!
//! Provides [`Button`] which owns one physical button's input, filters
//! contact bounce against a monotonic clock, detects validated press edges,
//! and tracks the owner's round participation and score. Also defines the
//! [`ButtonInput`] trait for hardware abstraction.

use crate::command::ButtonAction;
use crate::layout::{ButtonConfig, ButtonLayout};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ButtonLevel, Edge};

/// Trait for abstracting button input hardware.
///
/// Implement this for whatever delivers the raw reading (GPIO pin, matrix
/// scan cell, shift register bit) to let a button sample it.
pub trait ButtonInput {
    /// Returns the instantaneous, unfiltered reading of the input:
    /// true = pressed, false = released.
    ///
    /// This is raw electrical state and may bounce freely; the button's
    /// debounce window turns it into a trusted level. Handle any hardware
    /// errors internally - this method cannot fail.
    fn is_pressed(&mut self) -> bool;
}

/// One physical button and its player slot.
///
/// Each button samples its own input independently and holds everything the
/// game needs to know about one player: the debounced level, whether a
/// validated press has registered them into the current round, and their
/// accumulated score, alongside the name and render layout an external
/// display collaborator consumes.
///
/// Sampling is driven by a single cooperative polling loop calling
/// [`sample`](Button::sample) once per tick. Buttons never block and never
/// fail: round/score operations report no-ops instead of erroring, which is
/// all an embedded control loop without an error channel can do with them.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input implementation type
/// * `T` - Time source implementation type
/// * `NAME_CAP` - Maximum owner name length in bytes
pub struct Button<'t, I: TimeInstant, P: ButtonInput, T: TimeSource<I>, const NAME_CAP: usize> {
    input: P,
    time_source: &'t T,
    config: ButtonConfig<NAME_CAP>,
    debounce_interval: I::Duration,
    /// Trusted level. Only ever updated from readings that survived the
    /// debounce window.
    level: ButtonLevel,
    /// Last raw reading observed, trusted or not.
    raw: bool,
    /// Instant of the last raw-level change. The stability window is
    /// measured from here.
    changed_at: I,
    playing: bool,
    score: u32,
}

impl<'t, I: TimeInstant, P: ButtonInput, T: TimeSource<I>, const NAME_CAP: usize>
    Button<'t, I, P, T, NAME_CAP>
{
    /// Creates a new button: released, not playing, score zero.
    ///
    /// The input is read once to prime the raw level, so a button already
    /// held down at power-up commits to pressed after one full debounce
    /// interval instead of needing an extra transition.
    pub fn new(
        mut input: P,
        time_source: &'t T,
        config: ButtonConfig<NAME_CAP>,
        debounce_interval: I::Duration,
    ) -> Self {
        let raw = input.is_pressed();
        let changed_at = time_source.now();

        Self {
            input,
            time_source,
            config,
            debounce_interval,
            level: ButtonLevel::Released,
            raw,
            changed_at,
            playing: false,
            score: 0,
        }
    }

    /// Samples the raw input once and advances the debounce state machine.
    ///
    /// Call this once per polling tick. A raw reading that differs from the
    /// previous one restarts the stability window without being trusted. A
    /// reading that has held for at least the debounce interval and differs
    /// from the trusted level commits it.
    ///
    /// # Returns
    /// * `Some(Edge::Pressed { registered })` - The trusted level committed
    ///   to pressed. `registered` is true if this press entered the button
    ///   into the round (`playing` was false and is now true).
    /// * `Some(Edge::Released)` - The trusted level committed to released.
    ///   Participation is unaffected.
    /// * `None` - No commit this tick.
    pub fn sample(&mut self) -> Option<Edge> {
        let raw = self.input.is_pressed();
        let now = self.time_source.now();

        if raw != self.raw {
            // Raw level flipped: restart the stability window. The new
            // level is not trusted yet.
            self.raw = raw;
            self.changed_at = now;
            return None;
        }

        if raw == self.level.is_pressed() {
            // Raw agrees with the trusted level, nothing to commit.
            return None;
        }

        let stable = now.duration_since(self.changed_at);
        if stable.as_millis() < self.debounce_interval.as_millis() {
            // A stalled clock lands here too: zero elapsed time never
            // satisfies a non-zero interval.
            return None;
        }

        if raw {
            self.level = ButtonLevel::Pressed;
            let registered = !self.playing;
            self.playing = true;
            Some(Edge::Pressed { registered })
        } else {
            self.level = ButtonLevel::Released;
            Some(Edge::Released)
        }
    }

    /// Handles a button action by dispatching to the appropriate method.
    ///
    /// Convenience for command-based control, so orchestrator code can
    /// route [`ButtonAction`]s without matching on them manually.
    ///
    /// # Returns
    /// True if the action applied, false if it was ignored as a no-op
    /// (awarding a button that is not playing).
    pub fn handle_action(&mut self, action: ButtonAction) -> bool {
        match action {
            ButtonAction::Award(points) => self.award(points),
            ButtonAction::ResetRound => {
                self.reset_round();
                true
            }
            ButtonAction::ResetScore => {
                self.reset_score();
                true
            }
        }
    }

    /// Adds points to the score, if the button is playing.
    ///
    /// A button that has not registered a press this round cannot score:
    /// the call is ignored and reported as a no-op rather than failing.
    /// Additions saturate at `u32::MAX`.
    ///
    /// # Returns
    /// True if the points were applied.
    pub fn award(&mut self, points: u32) -> bool {
        if !self.playing {
            return false;
        }

        self.score = self.score.saturating_add(points);
        true
    }

    /// Ends round participation. The score is untouched; scores persist
    /// across rounds until explicitly reset.
    pub fn reset_round(&mut self) {
        self.playing = false;
    }

    /// Zeroes the score. Participation is untouched.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Returns the trusted, debounced level.
    pub fn level(&self) -> ButtonLevel {
        self.level
    }

    /// Returns true if the trusted level is pressed.
    pub fn is_pressed(&self) -> bool {
        self.level.is_pressed()
    }

    /// Returns true if a validated press has registered this button into
    /// the current round.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns the accumulated score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the owner's display name.
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Returns the render layout.
    pub fn layout(&self) -> &ButtonLayout {
        self.config.layout()
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &ButtonConfig<NAME_CAP> {
        &self.config
    }

    /// Returns the configured debounce interval.
    pub fn debounce_interval(&self) -> I::Duration {
        self.debounce_interval
    }

    /// Returns how long the raw level has held its current value.
    ///
    /// Useful for external monitoring: a raw level stuck at pressed for
    /// seconds is a jammed or shorted switch, which this crate has no
    /// channel to report itself.
    pub fn stable_for(&self) -> I::Duration {
        self.time_source.now().duration_since(self.changed_at)
    }
}
