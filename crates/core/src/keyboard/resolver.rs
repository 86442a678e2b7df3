use crate::keyboard::KeyEvent;

use rustc_hash::FxHashSet;

/// A platform key code.
///
/// Codes are opaque to the navigation engine; it only ever compares sets of
/// them. A [`Resolver`] decides what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(pub u32);

impl Code {
    /// The bit a [`Code`] carries when it was resolved with an Alt-like
    /// modifier.
    pub const ALT: u32 = 0x0800_0000;

    /// Returns the [`Code`] with the Alt bit set.
    #[must_use]
    pub const fn with_alt(self) -> Self {
        Self(self.0 | Self::ALT)
    }
}

/// The set of codes that may produce a character.
pub type Codes = FxHashSet<Code>;

/// Maps keys and characters to the platform codes that could produce them
/// under the current keyboard layout.
///
/// Resolution is many-to-one: the same physical key types different
/// characters in different layouts, and an Alt chord may resolve differently
/// than the bare key. This is why mnemonic matching compares sets.
pub trait Resolver {
    /// Returns the codes that could have produced the given [`KeyEvent`].
    ///
    /// The event is always resolved as if Alt were held.
    fn possible_codes(&self, event: &KeyEvent) -> Codes;

    /// Returns the codes that could produce the given character.
    fn possible_codes_for(&self, character: char, alt_like: bool) -> Codes;
}

impl<T> Resolver for &T
where
    T: Resolver + ?Sized,
{
    fn possible_codes(&self, event: &KeyEvent) -> Codes {
        (**self).possible_codes(event)
    }

    fn possible_codes_for(&self, character: char, alt_like: bool) -> Codes {
        (**self).possible_codes_for(character, alt_like)
    }
}

/// A [`Resolver`] that treats every character as its own key.
///
/// Characters resolve to their uppercase scalar values, so `e` and `E` land on
/// the same code. This is good enough for Latin layouts and for hosts that
/// have no layout service of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unicode;

impl Unicode {
    fn code(character: char, alt_like: bool) -> Code {
        let upper = character.to_uppercase().next().unwrap_or(character);
        let code = Code(u32::from(upper));

        if alt_like { code.with_alt() } else { code }
    }
}

impl Resolver for Unicode {
    fn possible_codes(&self, event: &KeyEvent) -> Codes {
        let character = event.single_char().or_else(|| event.key.to_char());

        character
            .map(|c| Self::code(c, true))
            .into_iter()
            .collect()
    }

    fn possible_codes_for(&self, character: char, alt_like: bool) -> Codes {
        std::iter::once(Self::code(character, alt_like)).collect()
    }
}
