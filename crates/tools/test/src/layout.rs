//! Resolve keys through a simulated keyboard layout.
use crate::core::keyboard::{Code, Codes, KeyEvent, Resolver};

/// A [`Resolver`] where some characters share a physical key.
///
/// Codes are the uppercase Latin letter printed on the key. A character
/// listed in the layout resolves to the code of its key; any other character
/// resolves to itself, like with [`Unicode`](crate::core::keyboard::Unicode).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    keys: Vec<(char, char)>,
}

impl Layout {
    /// The Russian ЙЦУКЕН layout, restricted to the keys tests need.
    pub fn russian() -> Self {
        Self::default()
            .key('A', 'Ф')
            .key('C', 'С')
            .key('E', 'У')
            .key('F', 'А')
            .key('G', 'П')
            .key('H', 'Р')
            .key('R', 'К')
            .key('S', 'Ы')
    }

    /// Adds a key printing `latin` that types `other` in this layout.
    #[must_use]
    pub fn key(mut self, latin: char, other: char) -> Self {
        self.keys.push((uppercase(latin), uppercase(other)));
        self
    }

    fn code(&self, character: char, alt_like: bool) -> Code {
        let upper = uppercase(character);

        let physical = self
            .keys
            .iter()
            .find(|(_, other)| *other == upper)
            .map_or(upper, |(latin, _)| *latin);

        let code = Code(u32::from(physical));

        if alt_like { code.with_alt() } else { code }
    }
}

impl Resolver for Layout {
    fn possible_codes(&self, event: &KeyEvent) -> Codes {
        event
            .single_char()
            .or_else(|| event.key.to_char())
            .map(|character| self.code(character, true))
            .into_iter()
            .collect()
    }

    fn possible_codes_for(&self, character: char, alt_like: bool) -> Codes {
        std::iter::once(self.code(character, alt_like)).collect()
    }
}

fn uppercase(character: char) -> char {
    character.to_uppercase().next().unwrap_or(character)
}
