//! Application menu model.
//!
//! This module defines the read-only view of an application's main menu that
//! keyboard navigation works with: an ordered list of top-level [`Item`]s,
//! each with a title that may carry a mnemonic marker and an ordered list of
//! children.
//!
//! ```
//! use menunav_core::menu::{AppMenu, Item, Store};
//!
//! let menu = AppMenu::new(vec![
//!     Item::submenu("file", "&File", vec![
//!         Item::new("new", "&New"),
//!         Item::new("save", "&Save"),
//!     ]),
//!     Item::new("help", "&Help"),
//! ])?;
//!
//! assert_eq!(menu.roots().len(), 2);
//! # Ok::<(), menunav_core::menu::Error>(())
//! ```
pub mod mnemonic;

pub use mnemonic::{ParsedMnemonic, parse_mnemonic};

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

/// Identifier of a menu item, unique among its siblings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuId(SmolStr);

impl MenuId {
    /// Creates a new [`MenuId`].
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    /// Returns the [`MenuId`] as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MenuId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MenuId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for MenuId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MenuId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A menu item.
///
/// Items without children are leaf actions; items with children are nested
/// menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: MenuId,
    title: String,
    children: Vec<Item>,
}

impl Item {
    /// Creates a leaf [`Item`].
    pub fn new(id: impl Into<MenuId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Creates an [`Item`] holding a nested menu.
    pub fn submenu(
        id: impl Into<MenuId>,
        title: impl Into<String>,
        children: impl IntoIterator<Item = Item>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Returns the [`MenuId`] of the [`Item`].
    pub fn id(&self) -> &MenuId {
        &self.id
    }

    /// Returns the raw title of the [`Item`], mnemonic marker included.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the children of the [`Item`].
    pub fn children(&self) -> &[Item] {
        &self.children
    }

    /// Returns `true` if the [`Item`] is a nested menu rather than a leaf.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the mnemonic character of the [`Item`], if its title has one.
    pub fn mnemonic(&self, marker: char) -> Option<char> {
        parse_mnemonic(&self.title, marker).mnemonic_char
    }
}

/// A source of top-level menu items.
///
/// Order matters: navigation walks [`roots`](Store::roots) in the order they
/// are returned, and the first mnemonic match wins.
pub trait Store {
    /// Returns the top-level items, in display order.
    fn roots(&self) -> &[Item];

    /// Returns the index of the top-level item with the given [`MenuId`].
    fn position(&self, id: &MenuId) -> Option<usize> {
        self.roots().iter().position(|item| item.id() == id)
    }

    /// Returns the top-level item with the given [`MenuId`].
    fn root(&self, id: &MenuId) -> Option<&Item> {
        self.roots().iter().find(|item| item.id() == id)
    }
}

impl<T> Store for Rc<T>
where
    T: Store + ?Sized,
{
    fn roots(&self) -> &[Item] {
        (**self).roots()
    }
}

impl<T> Store for Arc<T>
where
    T: Store + ?Sized,
{
    fn roots(&self) -> &[Item] {
        (**self).roots()
    }
}

/// A full application menu model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppMenu {
    roots: Vec<Item>,
}

impl AppMenu {
    /// Creates a new [`AppMenu`], checking that no identifier is empty and
    /// that identifiers are unique among siblings.
    pub fn new(roots: Vec<Item>) -> Result<Self, Error> {
        validate(&roots)?;

        Ok(Self { roots })
    }

    /// Finds the item with the given [`MenuId`], searching top-level items
    /// first and then their children, depth first.
    pub fn find(&self, id: &MenuId) -> Option<&Item> {
        fn find_in<'a>(items: &'a [Item], id: &MenuId) -> Option<&'a Item> {
            items
                .iter()
                .find(|item| item.id() == id)
                .or_else(|| items.iter().find_map(|item| find_in(item.children(), id)))
        }

        find_in(&self.roots, id)
    }
}

impl Store for AppMenu {
    fn roots(&self) -> &[Item] {
        &self.roots
    }
}

fn validate(items: &[Item]) -> Result<(), Error> {
    let mut seen = FxHashSet::default();

    for item in items {
        if item.id.as_str().is_empty() {
            return Err(Error::EmptyId {
                title: item.title.clone(),
            });
        }

        if !seen.insert(&item.id) {
            return Err(Error::DuplicateId(item.id.clone()));
        }

        validate(&item.children)?;
    }

    Ok(())
}

/// An error that occurred while building an [`AppMenu`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An item has an empty identifier.
    #[error("menu item {title:?} has an empty id")]
    EmptyId {
        /// The title of the offending item.
        title: String,
    },

    /// Two siblings share the same identifier.
    #[error("duplicate menu id among siblings: {0}")]
    DuplicateId(MenuId),
}
