//! Track the application lifecycle.

/// The state of the application as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// The application is visible and has input focus.
    #[default]
    Active,

    /// The application is visible but another application has input focus.
    Inactive,

    /// The application is not visible.
    Hidden,

    /// The application has been suspended by the platform.
    Suspended,
}

impl State {
    /// Returns `true` if the application has input focus.
    pub fn is_active(self) -> bool {
        self == State::Active
    }
}
