//! Dispatch named actions to the host.

/// The action asking the host to move keyboard focus to the first
/// interactive control of whatever just opened.
pub const NAV_FIRST_CONTROL: &str = "nav-first-control";

/// The action bus of the host.
///
/// Dispatching is fire-and-forget: the caller neither waits for nor checks
/// the outcome.
pub trait Dispatcher {
    /// Dispatches the action with the given identifier.
    fn dispatch(&mut self, action: &str);
}

impl<F> Dispatcher for F
where
    F: FnMut(&str),
{
    fn dispatch(&mut self, action: &str) {
        self(action);
    }
}
