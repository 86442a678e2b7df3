use crate::action;
use crate::event;
use crate::focus;

/// A connection to the state of the host application.
///
/// The navigation engine leverages a [`Shell`] to publish notifications, to
/// capture the event being processed, and to reach the focus subsystem and
/// the action bus. The host owns all of them; a [`Shell`] only borrows them
/// for the duration of a single event.
pub struct Shell<'a, Message> {
    messages: &'a mut Vec<Message>,
    focus: &'a mut dyn focus::Bridge,
    actions: &'a mut dyn action::Dispatcher,
    event_status: event::Status,
}

impl<'a, Message> Shell<'a, Message> {
    /// Creates a new [`Shell`] with the provided buffer of messages and the
    /// host services.
    pub fn new(
        messages: &'a mut Vec<Message>,
        focus: &'a mut dyn focus::Bridge,
        actions: &'a mut dyn action::Dispatcher,
    ) -> Self {
        Self {
            messages,
            focus,
            actions,
            event_status: event::Status::Ignored,
        }
    }

    /// Publish the given `Message` for the host to process it.
    pub fn publish(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Marks the current event as captured. Prevents the event from reaching
    /// any other handler.
    pub fn capture_event(&mut self) {
        self.event_status = event::Status::Captured;
    }

    /// Returns the current [`event::Status`] of the [`Shell`].
    #[must_use]
    pub fn event_status(&self) -> event::Status {
        self.event_status
    }

    /// Returns the focus subsystem of the host.
    pub fn focus(&mut self) -> &mut dyn focus::Bridge {
        &mut *self.focus
    }

    /// Dispatches the given action through the action bus of the host.
    pub fn dispatch(&mut self, action: &str) {
        self.actions.dispatch(action);
    }
}

impl<Message> std::fmt::Debug for Shell<'_, Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("messages", &self.messages.len())
            .field("event_status", &self.event_status)
            .finish_non_exhaustive()
    }
}
