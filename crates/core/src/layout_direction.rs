//! Layout direction support for RTL (right-to-left) languages.
//!
//! In a right-to-left layout the first menu of the bar is drawn on the right,
//! so the arrow keys have to swap meaning to keep following what the user
//! sees.

/// The direction of the layout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Left-to-right layout (default for most Western languages).
    #[default]
    Ltr,
    /// Right-to-left layout (for Arabic, Hebrew, etc.).
    Rtl,
}

impl LayoutDirection {
    /// Returns `true` if this is a right-to-left layout.
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == LayoutDirection::Rtl
    }

    /// Returns `true` if this is a left-to-right layout.
    #[inline]
    pub fn is_ltr(self) -> bool {
        self == LayoutDirection::Ltr
    }
}
