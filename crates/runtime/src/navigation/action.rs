//! The state transitions of menu navigation.
use crate::core::LayoutDirection;
use crate::core::keyboard::key::Named;
use crate::core::keyboard::{Codes, Key};
use crate::core::menu::MenuId;

/// A state transition chosen by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arm the highlight for the next Alt release.
    Arm,

    /// Perform a navigation [`Step`] inside the running session and disarm.
    Navigate(Step),

    /// Highlight and open the top-level menu whose mnemonic matches the
    /// codes, then arm.
    NavigateByMnemonic(Codes),

    /// Focus the item of an open menu whose mnemonic matches the codes.
    NavigateSubitem {
        /// The open menu.
        menu: MenuId,
        /// The codes produced by the key stroke.
        codes: Codes,
    },

    /// Save the focus control and highlight the first menu.
    StartSession,

    /// End the session and give focus back to the saved control.
    EndSessionAndRestore,

    /// End the session and leave focus where it is.
    EndSession,
}

/// A step of a running navigation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Move the highlight.
    Move(Direction),

    /// Open the highlighted menu.
    Activate,

    /// End the session and restore focus.
    Close,
}

impl Step {
    /// Returns the [`Step`] a navigation key performs, if it is one.
    ///
    /// The arrows follow the visual order of the bar, so they swap meaning
    /// in a right-to-left layout.
    pub fn from_key(key: &Key, direction: LayoutDirection) -> Option<Self> {
        let (left, right) = match direction {
            LayoutDirection::Ltr => (Direction::Previous, Direction::Next),
            LayoutDirection::Rtl => (Direction::Next, Direction::Previous),
        };

        match key.as_ref() {
            Key::Named(Named::ArrowLeft) => Some(Step::Move(left)),
            Key::Named(Named::ArrowRight) => Some(Step::Move(right)),
            Key::Named(Named::ArrowDown | Named::Space | Named::Enter) | Key::Character(" ") => {
                Some(Step::Activate)
            }
            Key::Named(Named::Escape) => Some(Step::Close),
            _ => None,
        }
    }
}

/// The direction of a highlight move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the first menu, wrapping to the last.
    Previous,

    /// Towards the last menu, wrapping to the first.
    Next,
}

impl Direction {
    /// Returns the index reached from `current` among `count` items, wrapping
    /// around both ends.
    ///
    /// Returns `None` if there are no items.
    pub fn step(self, current: usize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }

        let current = current.min(count - 1);

        Some(match self {
            Direction::Previous => current.checked_sub(1).unwrap_or(count - 1),
            Direction::Next => (current + 1) % count,
        })
    }
}
