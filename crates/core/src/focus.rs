//! Talk to the focus-navigation subsystem of the host.
//!
//! The host tracks which on-screen control is "active" independently of the
//! menu bar. Controls are grouped into panels, and panels into sections. The
//! navigation engine never owns any of them; it refers to controls through
//! opaque [`Control`] handles and resolves them through the [`Bridge`].
use smol_str::SmolStr;

/// An opaque handle to a control of the focus subsystem.
///
/// A handle is only a lookup key. The control it names may be gone by the
/// time the handle is used, in which case the [`Bridge`] ignores the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Control(u64);

impl Control {
    /// Creates a [`Control`] handle from a raw value chosen by the host.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of the [`Control`] handle.
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// The focus-navigation subsystem of the host.
///
/// Every request is best-effort: a missing section, panel or control turns
/// the request into a no-op. Nothing here can fail.
pub trait Bridge {
    /// Returns the name of the active section, if any.
    fn active_section(&self) -> Option<SmolStr>;

    /// Returns the name of the active panel, if any.
    fn active_panel(&self) -> Option<SmolStr>;

    /// Returns the active control, if any.
    fn active_control(&self) -> Option<Control>;

    /// Asks the subsystem to activate the control named `control` inside the
    /// given section and panel.
    fn request_activate_by_name(&mut self, section: &str, panel: &str, control: &str);

    /// Returns whether the shared focus indicator is currently visible.
    fn is_highlight_visible(&self) -> bool;

    /// Marks the given control as active or inactive.
    fn set_active(&mut self, control: Control, active: bool);

    /// Asks the given control to become active again.
    fn request_active(&mut self, control: Control);

    /// Triggers the given control, as if the user activated it.
    fn trigger(&mut self, control: Control);
}
