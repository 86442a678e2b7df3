//! Handle events of a user interface.
use crate::keyboard;
use crate::lifecycle;
use crate::mouse;
use crate::window;

/// A user interface event, as seen by an application-wide event filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event
    Keyboard(keyboard::Event),

    /// A mouse event
    Mouse(mouse::Event),

    /// The application changed its lifecycle state.
    Lifecycle(lifecycle::State),
}

/// The receiver an [`Event`] was about to be delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A window; either the application window or a popup.
    Window(window::Id),

    /// Anything that is not a window, like a widget inside one.
    Other,
}

impl Target {
    /// Returns the [`window::Id`] of the [`Target`], if it is a window.
    pub fn window(self) -> Option<window::Id> {
        match self {
            Target::Window(id) => Some(id),
            Target::Other => None,
        }
    }
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled and must continue to its destination.
    Ignored,

    /// The [`Event`] was handled and must not reach any other handler.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use menunav_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
