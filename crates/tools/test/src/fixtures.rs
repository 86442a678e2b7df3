//! Menus shared across tests.
use crate::core::menu::{AppMenu, Item};

/// `File`, `Edit` and `Help`, where `File` holds `Save` and a nested
/// `Recent` menu.
pub fn file_edit_help() -> AppMenu {
    build(vec![
        Item::submenu(
            "file",
            "&File",
            [
                Item::new("save", "&Save"),
                Item::new("save-as", "Save &As…"),
                Item::submenu("recent", "&Recent", [Item::new("recent-1", "&1 score.mscz")]),
            ],
        ),
        Item::submenu("edit", "&Edit", [Item::new("undo", "&Undo")]),
        Item::new("help", "&Help"),
    ])
}

/// `count` menus titled `Menu 0`, `Menu 1`, and so on.
///
/// The first ten get their digit as mnemonic.
pub fn numbered(count: usize) -> AppMenu {
    build(
        (0..count)
            .map(|index| {
                let title = if index < 10 {
                    format!("Menu &{index}")
                } else {
                    format!("Menu {index}")
                };

                Item::new(format!("menu-{index}"), title)
            })
            .collect(),
    )
}

/// A menu bar translated to Russian.
pub fn russian() -> AppMenu {
    build(vec![
        Item::submenu("file", "&Файл", [Item::new("save", "&Сохранить")]),
        Item::new("edit", "&Правка"),
    ])
}

fn build(roots: Vec<Item>) -> AppMenu {
    match AppMenu::new(roots) {
        Ok(menu) => menu,
        Err(error) => panic!("invalid fixture: {error}"),
    }
}
