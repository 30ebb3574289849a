use crate::button::{Button, ButtonInput};
use crate::command::ButtonCommand;
use crate::layout::ButtonConfig;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ButtonLevel, Edge};

/// An identifier for a button within a panel.
///
/// This is a simple wrapper around `usize` that provides type safety for
/// button identifiers. Users specify button IDs when adding buttons to a
/// panel, and use these IDs to target specific buttons with commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(pub usize);

impl From<usize> for ButtonId {
    fn from(id: usize) -> Self {
        ButtonId(id)
    }
}

impl From<ButtonId> for usize {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

/// Errors that can occur during panel operations.
///
/// These cover the panel's structure only. Operations on a button itself
/// (awarding, resets, sampling) are total and report no-ops instead of
/// erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    /// The specified button ID does not exist in the panel.
    InvalidButtonId(ButtonId),

    /// Attempted to add a button with an ID that already exists.
    DuplicateButtonId(ButtonId),

    /// The button ID exceeds the panel's capacity.
    ButtonIdOutOfBounds { id: ButtonId, capacity: usize },
}

impl core::fmt::Display for PanelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PanelError::InvalidButtonId(id) => {
                write!(f, "button ID {} does not exist in panel", id.0)
            }
            PanelError::DuplicateButtonId(id) => {
                write!(f, "button ID {} already exists in panel", id.0)
            }
            PanelError::ButtonIdOutOfBounds { id, capacity } => {
                write!(f, "button ID {} exceeds panel capacity of {}", id.0, capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PanelError {}

/// Manages a panel of buttons for a multi-player game.
///
/// This is the mapping from button identifier to owned button state: each
/// player slot is an independent state machine, and the only thing they
/// share is the monotonic time source. The panel routes orchestrator
/// commands to individual buttons and batch-samples all of them once per
/// polling tick.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input implementation type (must be same for all buttons in panel)
/// * `T` - Time source implementation type
/// * `NAME_CAP` - Maximum owner name length in bytes
/// * `MAX_BUTTONS` - Maximum number of buttons this panel can hold
pub struct Panel<
    't,
    I: TimeInstant,
    P: ButtonInput,
    T: TimeSource<I>,
    const NAME_CAP: usize,
    const MAX_BUTTONS: usize,
> {
    buttons: [Option<Button<'t, I, P, T, NAME_CAP>>; MAX_BUTTONS],
    time_source: &'t T,
    debounce_interval: I::Duration,
}

impl<'t, I, P, T, const NAME_CAP: usize, const MAX_BUTTONS: usize>
    Panel<'t, I, P, T, NAME_CAP, MAX_BUTTONS>
where
    I: TimeInstant,
    P: ButtonInput,
    T: TimeSource<I>,
{
    /// Creates a new empty panel.
    ///
    /// # Arguments
    /// * `time_source` - Reference to the time source shared by all buttons
    /// * `debounce_interval` - Stability window applied to every button
    pub fn new(time_source: &'t T, debounce_interval: I::Duration) -> Self {
        Self {
            buttons: core::array::from_fn(|_| None),
            time_source,
            debounce_interval,
        }
    }

    /// Adds a button to the panel with the specified ID.
    ///
    /// The input is moved into a new button which is stored in the panel.
    /// The provided ID is used to reference this button in future commands.
    ///
    /// # Errors
    /// * `DuplicateButtonId` - A button with this ID already exists
    /// * `ButtonIdOutOfBounds` - The ID exceeds the panel's capacity
    pub fn add_button(
        &mut self,
        id: ButtonId,
        input: P,
        config: ButtonConfig<NAME_CAP>,
    ) -> Result<(), PanelError> {
        let idx = id.0;

        if idx >= MAX_BUTTONS {
            return Err(PanelError::ButtonIdOutOfBounds {
                id,
                capacity: MAX_BUTTONS,
            });
        }

        if self.buttons[idx].is_some() {
            return Err(PanelError::DuplicateButtonId(id));
        }

        self.buttons[idx] = Some(Button::new(
            input,
            self.time_source,
            config,
            self.debounce_interval,
        ));
        Ok(())
    }

    /// Samples a single button's raw input.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn sample(&mut self, id: ButtonId) -> Result<Option<Edge>, PanelError> {
        Ok(self.get_mut(id)?.sample())
    }

    /// Samples every button once and collects the committed edges.
    ///
    /// This is one polling tick over the whole panel. Edges are returned in
    /// button ID order; buttons with no commit this tick contribute nothing.
    /// The result never spills: each button reports at most one edge per
    /// tick and the vector holds one slot per possible button.
    pub fn sample_all(&mut self) -> heapless::Vec<(ButtonId, Edge), MAX_BUTTONS> {
        let mut edges = heapless::Vec::new();

        for (idx, slot) in self.buttons.iter_mut().enumerate() {
            if let Some(button) = slot {
                if let Some(edge) = button.sample() {
                    let _ = edges.push((ButtonId(idx), edge));
                }
            }
        }

        edges
    }

    /// Routes a command to the specified button.
    ///
    /// # Returns
    /// * `Ok(true)` - Action applied
    /// * `Ok(false)` - Action was a no-op (awarding a non-playing button)
    /// * `Err` - Invalid button ID
    pub fn handle_command(
        &mut self,
        command: ButtonCommand<ButtonId>,
    ) -> Result<bool, PanelError> {
        Ok(self.get_mut(command.button_id)?.handle_action(command.action))
    }

    /// Ends round participation for every button on the panel.
    ///
    /// Scores are untouched; they persist until explicitly reset per button.
    pub fn reset_round_all(&mut self) {
        for slot in self.buttons.iter_mut().flatten() {
            slot.reset_round();
        }
    }

    /// Returns a reference to the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn button(&self, id: ButtonId) -> Result<&Button<'t, I, P, T, NAME_CAP>, PanelError> {
        self.get(id)
    }

    /// Returns the trusted level of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn level(&self, id: ButtonId) -> Result<ButtonLevel, PanelError> {
        Ok(self.get(id)?.level())
    }

    /// Returns whether the specified button is participating in the round.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn is_playing(&self, id: ButtonId) -> Result<bool, PanelError> {
        Ok(self.get(id)?.is_playing())
    }

    /// Returns the score of the specified button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the panel.
    pub fn score(&self, id: ButtonId) -> Result<u32, PanelError> {
        Ok(self.get(id)?.score())
    }

    /// Iterates over all buttons in ID order.
    ///
    /// This is the read surface for orchestration and rendering: scores,
    /// participation flags, names and layouts of every player slot.
    pub fn iter(&self) -> impl Iterator<Item = (ButtonId, &Button<'t, I, P, T, NAME_CAP>)> {
        self.buttons
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|button| (ButtonId(idx), button)))
    }

    /// Returns the number of buttons currently in the panel.
    pub fn len(&self) -> usize {
        self.buttons.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns true if the panel contains no buttons.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the panel contains a button with the given ID.
    pub fn contains(&self, id: ButtonId) -> bool {
        let idx = id.0;
        idx < MAX_BUTTONS && self.buttons[idx].is_some()
    }

    fn get(&self, id: ButtonId) -> Result<&Button<'t, I, P, T, NAME_CAP>, PanelError> {
        self.buttons
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .ok_or(PanelError::InvalidButtonId(id))
    }

    fn get_mut(
        &mut self,
        id: ButtonId,
    ) -> Result<&mut Button<'t, I, P, T, NAME_CAP>, PanelError> {
        self.buttons
            .get_mut(id.0)
            .and_then(|slot| slot.as_mut())
            .ok_or(PanelError::InvalidButtonId(id))
    }
}
