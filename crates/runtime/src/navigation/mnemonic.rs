//! Match key strokes against menu mnemonics.
//!
//! Both sides of a match go through the [`Resolver`]: the key stroke and the
//! mnemonic letter are turned into sets of codes, and a match is any overlap.
//! Comparing characters directly would break as soon as the user types with a
//! layout where the letter under the finger is not the one in the title.
use crate::core::keyboard::{Codes, Resolver};
use crate::core::menu::Item;

/// Returns the first item whose mnemonic can be produced by one of `codes`.
///
/// Items are checked in order; items without a mnemonic are skipped.
pub fn find<'a>(
    items: &'a [Item],
    codes: &Codes,
    keys: &dyn Resolver,
    marker: char,
) -> Option<&'a Item> {
    if codes.is_empty() {
        return None;
    }

    items.iter().find(|item| {
        let Some(mnemonic) = item.mnemonic(marker) else {
            return false;
        };

        let letter = mnemonic.to_uppercase().next().unwrap_or(mnemonic);

        !keys.possible_codes_for(letter, true).is_disjoint(codes)
    })
}
