//! Command-based control for buttons.
//!
//! Round orchestration lives outside this crate. The orchestrator drives
//! buttons through these commands: awarding points after a winning press,
//! resetting participation between rounds, zeroing scores for a new game.

/// Actions for controlling a button's round/score state.
///
/// Sampling is not an action: it happens on the polling tick, not on demand
/// from the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    /// Add points to the score. Ignored unless the button is playing.
    Award(u32),
    /// End round participation. The score is untouched.
    ResetRound,
    /// Zero the score. Participation is untouched.
    ResetScore,
}

/// Command targeting a specific button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonCommand<Id> {
    pub button_id: Id,
    pub action: ButtonAction,
}

impl<Id> ButtonCommand<Id> {
    /// Creates command.
    pub fn new(button_id: Id, action: ButtonAction) -> Self {
        Self { button_id, action }
    }
}
