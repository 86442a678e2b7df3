use crate::keyboard::key::Named;
use crate::keyboard::{Key, Modifiers};

use smol_str::SmolStr;

/// A keyboard event, as seen by an application-wide event filter.
///
/// Hosts deliver key input in two stages: a [`ShortcutOverride`] probe that
/// runs before the host's own shortcut system resolves accelerators, and the
/// committed [`KeyPressed`] that follows.
///
/// [`ShortcutOverride`]: Event::ShortcutOverride
/// [`KeyPressed`]: Event::KeyPressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The host is asking whether anyone wants to claim this key before it is
    /// resolved as a shortcut.
    ShortcutOverride(KeyEvent),

    /// A keyboard key was pressed.
    KeyPressed(KeyEvent),

    /// A keyboard key was released.
    KeyReleased(KeyEvent),
}

impl Event {
    /// Returns the [`KeyEvent`] carried by this [`Event`].
    pub fn key_event(&self) -> &KeyEvent {
        match self {
            Self::ShortcutOverride(key) | Self::KeyPressed(key) | Self::KeyReleased(key) => key,
        }
    }
}

/// A neutral description of a single key stroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key involved.
    pub key: Key,

    /// The state of the modifier keys when the event was produced.
    pub modifiers: Modifiers,

    /// The text produced by the key stroke, if any.
    pub text: Option<SmolStr>,
}

impl KeyEvent {
    /// Creates a [`KeyEvent`] for the given [`Key`], without modifiers or text.
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::empty(),
            text: None,
        }
    }

    /// Creates a [`KeyEvent`] for a key that types the given character.
    pub fn character(c: char) -> Self {
        let key = Key::from(c);
        let text = match &key {
            Key::Character(text) => Some(text.clone()),
            Key::Named(_) | Key::Unidentified => None,
        };

        Self {
            key,
            modifiers: Modifiers::empty(),
            text,
        }
    }

    /// Sets the [`Modifiers`] of the [`KeyEvent`].
    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the text produced by the [`KeyEvent`].
    #[must_use]
    pub fn text(mut self, text: impl Into<SmolStr>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the produced character if the event typed exactly one
    /// printable character.
    pub fn single_char(&self) -> Option<char> {
        let text = self.text.as_deref()?;
        let mut chars = text.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// Returns `true` if this is the Alt key itself, without Shift.
    pub fn is_bare_alt(&self) -> bool {
        self.key.is(Named::Alt) && !self.modifiers.shift()
    }
}
