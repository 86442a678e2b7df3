//! Identify keyboard keys.
use smol_str::SmolStr;

/// A key on the keyboard.
///
/// This is mostly the `Key` type found in [`winit`], reduced to the keys
/// menu navigation cares about.
///
/// [`winit`]: https://docs.rs/winit/0.30/winit/keyboard/enum.Key.html
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key<C = SmolStr> {
    /// A key with an established name.
    Named(Named),

    /// A key string that corresponds to the character typed by the user, taking into account the
    /// user’s current locale setting, and any system-level keyboard mapping overrides that are in
    /// effect.
    Character(C),

    /// An unidentified key.
    Unidentified,
}

impl Key {
    /// Convert `Key::Character(SmolStr)` to `Key::Character(&str)` so you can more easily match on
    /// `Key`. All other variants remain unchanged.
    pub fn as_ref(&self) -> Key<&str> {
        match self {
            Self::Named(named) => Key::Named(*named),
            Self::Character(c) => Key::Character(c.as_ref()),
            Self::Unidentified => Key::Unidentified,
        }
    }

    /// Returns the first character of a `Key::Character`, if any.
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Character(c) => c.chars().next(),
            Self::Named(_) | Self::Unidentified => None,
        }
    }

    /// Returns `true` if this is the given [`Named`] key.
    pub fn is(&self, named: Named) -> bool {
        matches!(self, Self::Named(n) if *n == named)
    }
}

impl From<Named> for Key {
    fn from(named: Named) -> Self {
        Self::Named(named)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        let mut buffer = [0; 4];

        Self::Character(SmolStr::new(c.encode_utf8(&mut buffer)))
    }
}

/// A named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Named {
    Alt,
    AltGraph,
    Control,
    Shift,
    Super,
    Enter,
    Tab,
    Space,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    End,
    Home,
    PageDown,
    PageUp,
    Backspace,
    Delete,
    Insert,
    ContextMenu,
    Escape,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}
