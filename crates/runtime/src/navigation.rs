//! Navigate the menu bar with the keyboard.
pub mod action;
pub mod classify;
pub mod mnemonic;

mod navigator;
mod state;

pub use action::{Action, Direction, Step};
pub use classify::Decision;
pub use navigator::Navigator;
pub use state::{Phase, State};

use crate::core::menu::MenuId;

/// A change the UI layer rendering the menu bar has to know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The highlighted top-level menu changed.
    ///
    /// `None` means no navigation session is active anymore.
    HighlightedMenuChanged(Option<MenuId>),

    /// The opened menu changed.
    OpenedMenuChanged(Option<MenuId>),

    /// The given menu should be opened.
    ///
    /// This is only a request; the UI layer reports back through
    /// [`Navigator::set_opened_menu`] once the popup is actually shown.
    OpenMenuRequested(MenuId),
}
