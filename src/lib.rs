//! menunav drives an application menu bar from the keyboard.
//!
//! It turns the keys of a desktop menu bar into a small navigation session:
//! tap Alt to highlight the first menu, walk the bar with the arrow keys,
//! open a menu with Enter, Space or Down, leave with Escape, or jump straight
//! to a menu by holding Alt and typing its mnemonic letter. Once a menu is
//! open, typing a mnemonic letter focuses the matching item.
//!
//! menunav does not draw anything. A host application:
//!
//! 1. Builds an [`AppMenu`](menu::AppMenu), or implements [`menu::Store`]
//!    for its own model.
//! 2. Implements [`focus::Bridge`] and [`action::Dispatcher`] on top of its
//!    focus subsystem and action bus.
//! 3. Translates its events into an [`Event`] and feeds them to a
//!    [`Navigator`], offering key presses to [`Navigator::probe`] first
//!    when it resolves shortcuts.
//! 4. Renders the menu bar from the [`Notification`]s it gets back.
//!
//! ```
//! use menunav::event::{Status, Target};
//! use menunav::keyboard::{self, KeyEvent, Modifiers};
//! use menunav::menu::{AppMenu, Item};
//! use menunav::{Event, Navigator, Notification, Shell, window};
//!
//! let menu = AppMenu::new(vec![
//!     Item::new("file", "&File"),
//!     Item::new("edit", "&Edit"),
//! ])?;
//!
//! let mut navigator = Navigator::new(menu);
//!
//! # struct Focus;
//! # impl menunav::focus::Bridge for Focus {
//! #     fn active_section(&self) -> Option<menunav::SmolStr> { None }
//! #     fn active_panel(&self) -> Option<menunav::SmolStr> { None }
//! #     fn active_control(&self) -> Option<menunav::focus::Control> { None }
//! #     fn request_activate_by_name(&mut self, _: &str, _: &str, _: &str) {}
//! #     fn is_highlight_visible(&self) -> bool { false }
//! #     fn set_active(&mut self, _: menunav::focus::Control, _: bool) {}
//! #     fn request_active(&mut self, _: menunav::focus::Control) {}
//! #     fn trigger(&mut self, _: menunav::focus::Control) {}
//! # }
//! let mut focus = Focus;
//! let mut actions = |action: &str| println!("dispatch {action}");
//! let mut notifications = Vec::new();
//!
//! let alt_e = KeyEvent::character('e').modifiers(Modifiers::ALT);
//! let event = Event::Keyboard(keyboard::Event::KeyPressed(alt_e));
//!
//! let mut shell = Shell::new(&mut notifications, &mut focus, &mut actions);
//! let status = navigator.update(Target::Window(window::Id::MAIN), &event, &mut shell);
//!
//! assert_eq!(status, Status::Captured);
//! assert!(notifications.contains(&Notification::OpenMenuRequested("edit".into())));
//! # Ok::<(), menunav::menu::Error>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
use menunav_core as core;
use menunav_runtime as runtime;

pub use crate::core::{Event, LayoutDirection, Settings, Shell, SmolStr};
pub use crate::runtime::navigation;
pub use crate::runtime::{Navigator, Notification};

pub use crate::core::{action, focus, lifecycle, menu, window};

pub mod event {
    //! Deliver events to the navigator.
    pub use crate::core::event::{Event, Status, Target};
}

pub mod keyboard {
    //! Describe key strokes and resolve them against the keyboard layout.
    pub use crate::core::keyboard::key;
    pub use crate::core::keyboard::{
        Code, Codes, Event, Key, KeyEvent, Modifiers, Resolver, Unicode,
    };
}

pub mod mouse {
    //! Describe pointer button presses.
    pub use crate::core::mouse::{Button, Event};
}

pub mod settings {
    //! Configure the navigator.
    pub use crate::core::settings::*;
}
