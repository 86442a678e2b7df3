//! Configure menu navigation.
use crate::LayoutDirection;
use crate::action;

/// The settings of menu navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The action dispatched after a menu is opened from the keyboard, so
    /// focus lands on its first control.
    ///
    /// By default, it is [`action::NAV_FIRST_CONTROL`].
    pub first_control_action: String,

    /// The character that marks the mnemonic in menu titles.
    ///
    /// By default, it is `&`.
    pub mnemonic_marker: char,

    /// Whether mnemonics are matched at all.
    ///
    /// Enabled by default on every platform. Hosts that do not want Alt+letter
    /// or in-menu letter navigation turn it off.
    pub mnemonics: bool,

    /// The direction the menu bar is laid out in.
    ///
    /// In [`LayoutDirection::Rtl`] the left arrow moves to the next menu.
    pub layout_direction: LayoutDirection,
}

impl Settings {
    /// Sets the action dispatched after a menu opens.
    #[must_use]
    pub fn first_control_action(mut self, action: impl Into<String>) -> Self {
        self.first_control_action = action.into();
        self
    }

    /// Sets the mnemonic marker.
    #[must_use]
    pub fn mnemonic_marker(mut self, marker: char) -> Self {
        self.mnemonic_marker = marker;
        self
    }

    /// Enables or disables mnemonics.
    #[must_use]
    pub fn mnemonics(mut self, enabled: bool) -> Self {
        self.mnemonics = enabled;
        self
    }

    /// Sets the [`LayoutDirection`] of the menu bar.
    #[must_use]
    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_control_action: action::NAV_FIRST_CONTROL.to_owned(),
            mnemonic_marker: '&',
            mnemonics: true,
            layout_direction: LayoutDirection::default(),
        }
    }
}

#[cfg(feature = "serde")]
mod loader {
    use super::{Error, Settings};

    use std::path::Path;

    impl Settings {
        /// Parses [`Settings`] from a RON string.
        ///
        /// Missing fields keep their default value.
        pub fn from_ron(source: &str) -> Result<Self, Error> {
            ron::from_str(source).map_err(|error| Error::Parse(error.to_string()))
        }

        /// Loads [`Settings`] from a RON file.
        pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
            let path = path.as_ref();
            let source = std::fs::read_to_string(path).map_err(|error| Error::Read {
                path: path.display().to_string(),
                reason: error.to_string(),
            })?;

            let settings = Self::from_ron(&source)?;
            log::debug!("Menu navigation settings loaded from {}", path.display());

            Ok(settings)
        }
    }
}

/// An error that occurred while loading [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {reason}")]
    Read {
        /// The path of the file.
        path: String,
        /// The underlying I/O error.
        reason: String,
    },

    /// The settings could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(String),
}
