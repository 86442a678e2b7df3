//! Decide what an event means for menu navigation.
//!
//! Classification happens in two stages, mirroring how hosts deliver keys:
//!
//! 1. [`probe`] answers the host's shortcut-override question. Claiming a key
//!    here is what keeps single-letter accelerators from swallowing Alt+letter
//!    mnemonics before the key press is ever delivered.
//! 2. [`commit`] looks at the delivered event and picks a [`Decision`].
//!
//! Both are pure: they only read the [`Context`].
use crate::core::event::{Event, Target};
use crate::core::keyboard::{self, KeyEvent, Resolver};
use crate::core::menu::{MenuId, Store};
use crate::core::{Settings, mouse, window};

use crate::navigation::mnemonic;
use crate::navigation::{Action, State, Step};

/// What to do with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Not menu navigation; the event continues to its destination.
    Ignore,

    /// Claim the event without changing anything.
    Consume,

    /// Claim the event and perform the [`Action`].
    ConsumeAndAct(Action),

    /// Perform the [`Action`] and let the event continue to its destination.
    Observe(Action),
}

/// Everything classification reads.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// The navigation state.
    pub state: &'a State,
    /// The menu model.
    pub menu: &'a dyn Store,
    /// The key resolution service.
    pub keys: &'a dyn Resolver,
    /// The navigation settings.
    pub settings: &'a Settings,
    /// The window hosting the menu bar.
    pub app_window: Option<window::Id>,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("state", self.state)
            .field("settings", self.settings)
            .field("app_window", &self.app_window)
            .finish_non_exhaustive()
    }
}

impl Context<'_> {
    /// Returns the open menu, as long as it still exists in the model.
    pub fn opened_menu(&self) -> Option<&MenuId> {
        self.state
            .opened()
            .filter(|id| self.menu.root(id).is_some())
    }

    fn route(&self, target: Target) -> Route<'_> {
        let window = target.window();

        match self.opened_menu() {
            Some(menu) if window.is_some() => Route::OpenedMenu(menu),
            _ if window.is_some() && window == self.app_window => Route::MenuBar,
            _ => Route::Unrelated,
        }
    }

    /// No modifiers and a single character: typing a mnemonic inside an
    /// open menu or during a session.
    fn is_plain_symbol(&self, key: &KeyEvent) -> bool {
        self.settings.mnemonics && key.modifiers.is_empty() && key.single_char().is_some()
    }

    fn is_mnemonic_candidate(&self, key: &KeyEvent) -> bool {
        let with_symbol = self.is_plain_symbol(key) && self.state.is_session_active();
        let with_alt = self.settings.mnemonics
            && key.modifiers.is_alt_without_shift()
            && key.single_char().is_some();

        with_symbol || with_alt
    }

    fn matches_root(&self, codes: &keyboard::Codes) -> bool {
        mnemonic::find(
            self.menu.roots(),
            codes,
            self.keys,
            self.settings.mnemonic_marker,
        )
        .is_some()
    }

    fn matches_subitem(&self, menu: &MenuId, codes: &keyboard::Codes) -> bool {
        self.menu.root(menu).is_some_and(|item| {
            mnemonic::find(
                item.children(),
                codes,
                self.keys,
                self.settings.mnemonic_marker,
            )
            .is_some()
        })
    }

    fn navigation_step(&self, key: &KeyEvent) -> Option<Step> {
        if !self.state.is_session_active() {
            return None;
        }

        Step::from_key(&key.key, self.settings.layout_direction)
    }
}

enum Route<'a> {
    OpenedMenu(&'a MenuId),
    MenuBar,
    Unrelated,
}

/// Returns `true` if the key has to be claimed before the host resolves it
/// as a shortcut.
pub fn probe(context: &Context<'_>, target: Target, key: &KeyEvent) -> bool {
    match context.route(target) {
        Route::OpenedMenu(menu) => {
            context.is_plain_symbol(key)
                && context.matches_subitem(menu, &context.keys.possible_codes(key))
        }
        Route::MenuBar => {
            if context.navigation_step(key).is_some() {
                return true;
            }

            context.is_mnemonic_candidate(key)
                && context.matches_root(&context.keys.possible_codes(key))
        }
        Route::Unrelated => false,
    }
}

/// Returns the [`Decision`] for a delivered event.
pub fn commit(context: &Context<'_>, target: Target, event: &Event) -> Decision {
    match event {
        Event::Lifecycle(state) if !state.is_active() => Decision::Observe(Action::EndSession),
        Event::Lifecycle(_) => Decision::Ignore,
        Event::Keyboard(keyboard::Event::ShortcutOverride(key)) => {
            if probe(context, target, key) {
                Decision::Consume
            } else {
                Decision::Ignore
            }
        }
        _ => match context.route(target) {
            Route::OpenedMenu(menu) => commit_opened_menu(context, menu, event),
            Route::MenuBar => commit_menu_bar(context, event),
            Route::Unrelated => Decision::Ignore,
        },
    }
}

fn commit_opened_menu(context: &Context<'_>, menu: &MenuId, event: &Event) -> Decision {
    let Event::Keyboard(keyboard::Event::KeyPressed(key)) = event else {
        return Decision::Ignore;
    };

    if !context.is_plain_symbol(key) {
        return Decision::Ignore;
    }

    let codes = context.keys.possible_codes(key);

    if !context.matches_subitem(menu, &codes) {
        return Decision::Ignore;
    }

    Decision::ConsumeAndAct(Action::NavigateSubitem {
        menu: menu.clone(),
        codes,
    })
}

fn commit_menu_bar(context: &Context<'_>, event: &Event) -> Decision {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed(key)) => {
            if key.is_bare_alt() {
                // Let the press through; the host still reveals underlines
                return Decision::Observe(Action::Arm);
            }

            if let Some(step) = context.navigation_step(key) {
                return Decision::ConsumeAndAct(Action::Navigate(step));
            }

            if !context.is_mnemonic_candidate(key) {
                return Decision::Ignore;
            }

            let codes = context.keys.possible_codes(key);

            if context.matches_root(&codes) {
                Decision::ConsumeAndAct(Action::NavigateByMnemonic(codes))
            } else {
                Decision::Ignore
            }
        }
        Event::Keyboard(keyboard::Event::KeyReleased(key)) if key.is_bare_alt() => {
            if context.state.is_session_active() {
                Decision::Observe(Action::EndSessionAndRestore)
            } else if context.state.is_armed() {
                Decision::Observe(Action::StartSession)
            } else {
                Decision::Observe(Action::Arm)
            }
        }
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Decision::Observe(Action::EndSession),
        _ => Decision::Ignore,
    }
}
