//! A focus subsystem that records every request.
use crate::core::SmolStr;
use crate::core::focus::{Bridge, Control};

/// A request received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// A control was asked to become active by name.
    ActivateByName {
        /// The section of the control.
        section: String,
        /// The panel of the control.
        panel: String,
        /// The name of the control.
        control: String,
    },

    /// A control was activated or deactivated directly.
    SetActive(Control, bool),

    /// A control was asked to become active.
    RequestActive(Control),

    /// A control was triggered.
    Trigger(Control),
}

/// A [`Bridge`] that keeps a log of the requests it receives.
///
/// It also behaves like a tiny focus subsystem: activating a control makes it
/// the active one, so follow-up queries see the effect of earlier requests.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    section: Option<SmolStr>,
    panel: Option<SmolStr>,
    active: Option<Control>,
    highlight_visible: bool,
    named: Vec<(String, Control)>,
    calls: Vec<Call>,
}

impl Recorder {
    /// Creates an empty [`Recorder`] with no active control and a hidden
    /// focus highlight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the given control the active one.
    #[must_use]
    pub fn active(mut self, control: Control) -> Self {
        self.active = Some(control);
        self
    }

    /// Sets whether the focus highlight is visible.
    #[must_use]
    pub fn highlight_visible(mut self, visible: bool) -> Self {
        self.highlight_visible = visible;
        self
    }

    /// Moves the recorder into the given section and panel.
    pub fn enter_panel(&mut self, section: &str, panel: &str) {
        self.section = Some(section.into());
        self.panel = Some(panel.into());
    }

    /// Returns the requests received so far, oldest first.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Returns the handle given to the control activated under `name`.
    pub fn control_named(&self, name: &str) -> Option<Control> {
        self.named
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, control)| *control)
    }

    /// Returns how many times focus was requested back onto a control.
    pub fn restore_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::RequestActive(_)))
            .count()
    }

    fn control_for(&mut self, name: &str) -> Control {
        if let Some(control) = self.control_named(name) {
            return control;
        }

        let control = Control::from_raw(1_000 + self.named.len() as u64);
        self.named.push((name.to_owned(), control));

        control
    }
}

impl Bridge for Recorder {
    fn active_section(&self) -> Option<SmolStr> {
        self.section.clone()
    }

    fn active_panel(&self) -> Option<SmolStr> {
        self.panel.clone()
    }

    fn active_control(&self) -> Option<Control> {
        self.active
    }

    fn request_activate_by_name(&mut self, section: &str, panel: &str, control: &str) {
        self.calls.push(Call::ActivateByName {
            section: section.to_owned(),
            panel: panel.to_owned(),
            control: control.to_owned(),
        });

        self.active = Some(self.control_for(control));
    }

    fn is_highlight_visible(&self) -> bool {
        self.highlight_visible
    }

    fn set_active(&mut self, control: Control, active: bool) {
        self.calls.push(Call::SetActive(control, active));

        if active {
            self.active = Some(control);
        } else if self.active == Some(control) {
            self.active = None;
        }
    }

    fn request_active(&mut self, control: Control) {
        self.calls.push(Call::RequestActive(control));
        self.active = Some(control);
    }

    fn trigger(&mut self, control: Control) {
        self.calls.push(Call::Trigger(control));
    }
}
