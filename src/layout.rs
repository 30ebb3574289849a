//! Identity and render-layout configuration for buttons.
//!
//! Every button carries the data an external renderer needs to draw it: the
//! index of its lamp on the LED strip and the screen anchors for its owner's
//! name and score. The crate itself never renders anything; it only keeps
//! this data alongside the runtime state so the rendering side has a single
//! place to read from.

/// Screen coordinates where a text field is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextAnchor {
    pub x: i32,
    pub y: i32,
}

impl TextAnchor {
    /// Creates a new text anchor.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Render-layout data for one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLayout {
    /// Index of this button's lamp on the LED strip/panel.
    pub pixel: usize,

    /// Where the owner's name is drawn.
    pub name_anchor: TextAnchor,

    /// Where the owner's score is drawn.
    pub score_anchor: TextAnchor,
}

impl ButtonLayout {
    /// Creates a new layout.
    #[inline]
    pub const fn new(pixel: usize, name_anchor: TextAnchor, score_anchor: TextAnchor) -> Self {
        Self {
            pixel,
            name_anchor,
            score_anchor,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The owner name does not fit the configured name capacity.
    NameTooLong {
        /// Length of the rejected name in bytes.
        len: usize,
        /// Maximum capacity in bytes.
        capacity: usize,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NameTooLong { len, capacity } => {
                write!(
                    f,
                    "owner name of {} bytes exceeds capacity of {} bytes",
                    len, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Static configuration for one button: owner name plus render layout.
///
/// The name is fixed at construction. Reconfiguring a panel (new players,
/// new screen layout) means rebuilding it, which matches the device-init
/// lifecycle this crate targets.
///
/// # Type Parameters
/// * `NAME_CAP` - Maximum owner name length in bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonConfig<const NAME_CAP: usize> {
    name: heapless::String<NAME_CAP>,
    layout: ButtonLayout,
}

impl<const NAME_CAP: usize> ButtonConfig<NAME_CAP> {
    /// Creates a new button configuration.
    ///
    /// # Errors
    /// * `NameTooLong` - `name` does not fit in `NAME_CAP` bytes. Names are
    ///   never silently truncated.
    pub fn new(name: &str, layout: ButtonLayout) -> Result<Self, ConfigError> {
        let mut buf = heapless::String::new();
        buf.push_str(name).map_err(|_| ConfigError::NameTooLong {
            len: name.len(),
            capacity: NAME_CAP,
        })?;

        Ok(Self { name: buf, layout })
    }

    /// Returns the owner's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the render layout.
    pub fn layout(&self) -> &ButtonLayout {
        &self.layout
    }
}
