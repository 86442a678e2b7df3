//! Listen to keyboard events.
pub mod key;

mod event;
mod modifiers;
mod resolver;

pub use event::{Event, KeyEvent};
pub use key::Key;
pub use modifiers::Modifiers;
pub use resolver::{Code, Codes, Resolver, Unicode};
