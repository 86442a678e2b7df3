use crate::core::focus;
use crate::core::menu::MenuId;

/// Where the menu bar stands with respect to the Alt key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// No session. A lone Alt release only arms.
    #[default]
    Idle,

    /// No session. The next Alt release starts one.
    ArmedForHighlight,

    /// A navigation session is running.
    SessionActive {
        /// The highlighted top-level menu.
        highlighted: MenuId,
        /// Whether the phase falls back to [`Phase::ArmedForHighlight`]
        /// instead of [`Phase::Idle`] once the session ends.
        armed: bool,
    },
}

/// The navigation state of a menu bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    phase: Phase,
    opened: Option<MenuId>,
    saved_control: Option<focus::Control>,
}

impl State {
    /// Creates a new idle [`State`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current [`Phase`].
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the highlighted top-level menu, if a session is active.
    pub fn highlighted(&self) -> Option<&MenuId> {
        match &self.phase {
            Phase::SessionActive { highlighted, .. } => Some(highlighted),
            Phase::Idle | Phase::ArmedForHighlight => None,
        }
    }

    /// Returns the menu whose popup is currently shown, if any.
    pub fn opened(&self) -> Option<&MenuId> {
        self.opened.as_ref()
    }

    /// Returns `true` if a navigation session is active.
    pub fn is_session_active(&self) -> bool {
        matches!(self.phase, Phase::SessionActive { .. })
    }

    /// Returns `true` if an Alt release is pending to activate the highlight.
    pub fn is_armed(&self) -> bool {
        match self.phase {
            Phase::Idle => false,
            Phase::ArmedForHighlight => true,
            Phase::SessionActive { armed, .. } => armed,
        }
    }

    /// Returns the focus control saved when the session started.
    pub fn saved_control(&self) -> Option<focus::Control> {
        self.saved_control
    }

    pub(crate) fn arm(&mut self) {
        match &mut self.phase {
            Phase::Idle | Phase::ArmedForHighlight => self.phase = Phase::ArmedForHighlight,
            Phase::SessionActive { armed, .. } => *armed = true,
        }
    }

    pub(crate) fn disarm(&mut self) {
        match &mut self.phase {
            Phase::Idle | Phase::ArmedForHighlight => self.phase = Phase::Idle,
            Phase::SessionActive { armed, .. } => *armed = false,
        }
    }

    /// Highlights the given menu, starting a session if needed.
    ///
    /// Returns `true` if the highlighted menu changed.
    pub(crate) fn highlight(&mut self, id: MenuId) -> bool {
        match &mut self.phase {
            Phase::SessionActive { highlighted, .. } => {
                if *highlighted == id {
                    return false;
                }

                *highlighted = id;
            }
            Phase::Idle | Phase::ArmedForHighlight => {
                let armed = self.is_armed();

                self.phase = Phase::SessionActive {
                    highlighted: id,
                    armed,
                };
            }
        }

        true
    }

    /// Ends the current session, if any.
    ///
    /// Returns `true` if a session was active.
    pub(crate) fn end_session(&mut self) -> bool {
        let Phase::SessionActive { armed, .. } = self.phase else {
            return false;
        };

        self.phase = if armed {
            Phase::ArmedForHighlight
        } else {
            Phase::Idle
        };

        true
    }

    /// Returns `true` if the opened menu changed.
    pub(crate) fn set_opened(&mut self, opened: Option<MenuId>) -> bool {
        if self.opened == opened {
            return false;
        }

        self.opened = opened;
        true
    }

    pub(crate) fn save_control(&mut self, control: focus::Control) {
        self.saved_control = Some(control);
    }

    pub(crate) fn take_saved_control(&mut self) -> Option<focus::Control> {
        self.saved_control.take()
    }
}
