//! The core library of menunav.
//!
//! This library holds the neutral types shared by the navigation engine and
//! the host application: keyboard and pointer events, the menu model, and
//! the traits describing the services the engine talks to.
//!
//! Nothing in here knows about a concrete windowing toolkit. A host translates
//! its own events into an [`Event`] and implements [`focus::Bridge`],
//! [`action::Dispatcher`] and [`keyboard::Resolver`] on top of whatever it
//! already has.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod action;
pub mod event;
pub mod focus;
pub mod keyboard;
pub mod lifecycle;
pub mod menu;
pub mod mouse;
pub mod settings;
pub mod window;

mod layout_direction;
mod shell;

pub use event::Event;
pub use layout_direction::LayoutDirection;
pub use settings::Settings;
pub use shell::Shell;
pub use smol_str::SmolStr;
