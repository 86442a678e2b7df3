//! Mnemonic markers in menu titles.
//!
//! Titles use a marker character (usually `&`) in front of the letter that
//! activates the item, e.g. `"&File"` or `"E&xit"`. A doubled marker is a
//! literal one.
use std::borrow::Cow;

/// Parsed mnemonic information from a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMnemonic<'a> {
    /// The display text with mnemonic markers removed.
    pub display_text: Cow<'a, str>,
    /// The mnemonic character (lowercase).
    pub mnemonic_char: Option<char>,
    /// Byte index of the mnemonic character in `display_text`.
    pub underline_index: Option<usize>,
}

/// Parse a title for a mnemonic marker.
///
/// # Examples
/// - `"&File"` → `("File", Some('f'), Some(0))`
/// - `"E&xit"` → `("Exit", Some('x'), Some(1))`
/// - `"Save && Close"` → `("Save & Close", None, None)` (escaped)
/// - `"No mnemonic"` → `("No mnemonic", None, None)`
pub fn parse_mnemonic(title: &str, marker: char) -> ParsedMnemonic<'_> {
    if !title.contains(marker) {
        return ParsedMnemonic {
            display_text: Cow::Borrowed(title),
            mnemonic_char: None,
            underline_index: None,
        };
    }

    let mut result = String::with_capacity(title.len());
    let mut mnemonic_char = None;
    let mut underline_index = None;
    let mut chars = title.chars().peekable();

    while let Some(c) = chars.next() {
        if c != marker {
            result.push(c);
            continue;
        }

        if chars.peek() == Some(&marker) {
            result.push(marker);
            let _ = chars.next();
        } else if let Some(next) = chars.next() {
            // Only the first marker counts
            if mnemonic_char.is_none() {
                underline_index = Some(result.len());
                mnemonic_char = next.to_lowercase().next();
            }
            result.push(next);
        }
    }

    ParsedMnemonic {
        display_text: Cow::Owned(result),
        mnemonic_char,
        underline_index,
    }
}
