use crate::core::event::{self, Event, Target};
use crate::core::keyboard::{Codes, KeyEvent, Resolver, Unicode};
use crate::core::menu::{MenuId, Store};
use crate::core::{Settings, Shell, window};

use crate::navigation::classify::{self, Context, Decision};
use crate::navigation::mnemonic;
use crate::navigation::{Action, Direction, Notification, State, Step};

/// Keyboard navigation for a menu bar.
///
/// A [`Navigator`] is created once together with the menu model and then fed
/// every event of the application through [`update`](Self::update), plus the
/// shortcut-override probes through [`probe`](Self::probe).
///
/// ```
/// use menunav_runtime::Navigator;
/// use menunav_runtime::core::menu::{AppMenu, Item};
///
/// let menu = AppMenu::new(vec![
///     Item::new("file", "&File"),
///     Item::new("edit", "&Edit"),
/// ])?;
///
/// let navigator = Navigator::new(menu);
///
/// assert_eq!(navigator.highlighted_menu(), None);
/// # Ok::<(), menunav_runtime::core::menu::Error>(())
/// ```
#[derive(Debug)]
pub struct Navigator<M, K = Unicode> {
    menu: M,
    keys: K,
    settings: Settings,
    state: State,
    app_window: Option<window::Id>,
}

impl<M> Navigator<M>
where
    M: Store,
{
    /// Creates a new [`Navigator`] for the given menu, resolving keys with
    /// the [`Unicode`] resolver.
    pub fn new(menu: M) -> Self {
        Self::with_resolver(menu, Unicode)
    }
}

impl<M, K> Navigator<M, K>
where
    M: Store,
    K: Resolver,
{
    /// Creates a new [`Navigator`] for the given menu and key resolver.
    ///
    /// The menu bar is assumed to live in [`window::Id::MAIN`].
    pub fn with_resolver(menu: M, keys: K) -> Self {
        Self {
            menu,
            keys,
            settings: Settings::default(),
            state: State::new(),
            app_window: Some(window::Id::MAIN),
        }
    }

    /// Sets the [`Settings`] of the [`Navigator`].
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the current [`Settings`].
    pub fn current_settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the menu model.
    pub fn menu(&self) -> &M {
        &self.menu
    }

    /// Replaces the menu model, ending the session if the highlighted menu
    /// is gone from the new one.
    pub fn replace_menu(&mut self, menu: M, shell: &mut Shell<'_, Notification>) {
        self.menu = menu;
        self.revalidate(shell);
    }

    /// Returns the navigation [`State`].
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the window hosting the menu bar.
    pub fn app_window(&self) -> Option<window::Id> {
        self.app_window
    }

    /// Sets the window hosting the menu bar.
    ///
    /// Until a window is set, only open menus react to keys.
    pub fn set_app_window(&mut self, window: Option<window::Id>) {
        self.app_window = window;
    }

    /// Returns the highlighted top-level menu, if a session is active.
    pub fn highlighted_menu(&self) -> Option<&MenuId> {
        self.state.highlighted()
    }

    /// Returns the menu whose popup is shown, if any.
    pub fn opened_menu(&self) -> Option<&MenuId> {
        self.state.opened()
    }

    /// Records which menu the UI layer actually opened.
    pub fn set_opened_menu(
        &mut self,
        opened: Option<MenuId>,
        shell: &mut Shell<'_, Notification>,
    ) {
        if self.state.set_opened(opened.clone()) {
            log::debug!("Menu navigation: opened menu is now {opened:?}");
            shell.publish(Notification::OpenedMenuChanged(opened));
        }
    }

    /// Returns `true` if the key has to be claimed before the host resolves
    /// it as a shortcut.
    pub fn probe(&self, target: Target, key: &KeyEvent) -> bool {
        classify::probe(&self.context(), target, key)
    }

    /// Processes an event, performing whatever navigation it means.
    ///
    /// Returns [`event::Status::Captured`] if the event must not reach any
    /// other handler.
    pub fn update(
        &mut self,
        target: Target,
        event: &Event,
        shell: &mut Shell<'_, Notification>,
    ) -> event::Status {
        self.revalidate(shell);

        let decision = classify::commit(&self.context(), target, event);

        match decision {
            Decision::Ignore => {}
            Decision::Consume => shell.capture_event(),
            Decision::ConsumeAndAct(action) => {
                self.perform(action, shell);
                shell.capture_event();
            }
            Decision::Observe(action) => self.perform(action, shell),
        }

        shell.event_status()
    }

    /// Performs an [`Action`].
    pub fn perform(&mut self, action: Action, shell: &mut Shell<'_, Notification>) {
        log::trace!("Menu navigation: {action:?}");

        match action {
            Action::Arm => self.state.arm(),
            Action::Navigate(step) => {
                match step {
                    Step::Move(direction) => self.move_highlight(direction, shell),
                    Step::Activate => self.activate(shell),
                    Step::Close => self.end_session_and_restore(shell),
                }

                self.state.disarm();
            }
            Action::NavigateByMnemonic(codes) => {
                self.navigate_by_mnemonic(&codes, shell);
                self.state.arm();
            }
            Action::NavigateSubitem { menu, codes } => {
                self.navigate_subitem(&menu, &codes, shell);
            }
            Action::StartSession => {
                self.save_focus_control(shell);
                self.navigate_to_first(shell);
            }
            Action::EndSessionAndRestore => self.end_session_and_restore(shell),
            Action::EndSession => self.end_session(shell),
        }
    }

    /// Moves the highlight to the previous or next top-level menu, wrapping
    /// around both ends.
    pub fn move_highlight(&mut self, direction: Direction, shell: &mut Shell<'_, Notification>) {
        let Some(current) = self
            .state
            .highlighted()
            .and_then(|id| self.menu.position(id))
        else {
            return;
        };

        let roots = self.menu.roots();

        let Some(item) = direction
            .step(current, roots.len())
            .and_then(|index| roots.get(index))
        else {
            return;
        };

        let id = item.id().clone();
        self.highlight(id, shell);
    }

    /// Requests the highlighted menu to open and focus to move into it.
    pub fn activate(&mut self, shell: &mut Shell<'_, Notification>) {
        let Some(id) = self.state.highlighted().cloned() else {
            log::trace!("Menu navigation: nothing highlighted to activate");
            return;
        };

        log::debug!("Menu navigation: opening {id}");

        shell.publish(Notification::OpenMenuRequested(id));
        shell.dispatch(&self.settings.first_control_action);
    }

    /// Ends the session and gives focus back to the control that had it
    /// before the session started.
    pub fn end_session_and_restore(&mut self, shell: &mut Shell<'_, Notification>) {
        self.end_session(shell);
        self.restore_focus_control(shell);
    }

    /// Ends the session, leaving focus alone.
    pub fn end_session(&mut self, shell: &mut Shell<'_, Notification>) {
        if self.state.end_session() {
            log::debug!("Menu navigation: session ended");
            shell.publish(Notification::HighlightedMenuChanged(None));
        }
    }

    /// Starts a session on the top-level menu whose mnemonic matches the
    /// codes and opens it.
    pub fn navigate_by_mnemonic(&mut self, codes: &Codes, shell: &mut Shell<'_, Notification>) {
        let Some(item) = mnemonic::find(
            self.menu.roots(),
            codes,
            &self.keys,
            self.settings.mnemonic_marker,
        ) else {
            return;
        };

        let id = item.id().clone();
        log::debug!("Menu navigation: mnemonic matched {id}");

        self.save_focus_control(shell);
        self.highlight(id, shell);
        self.activate(shell);
    }

    /// Highlights the first top-level menu.
    pub fn navigate_to_first(&mut self, shell: &mut Shell<'_, Notification>) {
        let Some(first) = self.menu.roots().first() else {
            return;
        };

        let id = first.id().clone();
        self.highlight(id, shell);
    }

    /// Focuses the item of an open menu whose mnemonic matches the codes.
    ///
    /// Nested menus are also triggered so they expand. Leaf actions are only
    /// focused; firing them is left to the normal interaction path.
    pub fn navigate_subitem(
        &mut self,
        menu: &MenuId,
        codes: &Codes,
        shell: &mut Shell<'_, Notification>,
    ) {
        let Some(subitem) = self.menu.root(menu).and_then(|item| {
            mnemonic::find(
                item.children(),
                codes,
                &self.keys,
                self.settings.mnemonic_marker,
            )
        }) else {
            return;
        };

        let focus = shell.focus();

        let (Some(section), Some(panel)) = (focus.active_section(), focus.active_panel()) else {
            log::trace!("Menu navigation: no active section or panel for {}", subitem.id());
            return;
        };

        log::debug!("Menu navigation: focusing {} in {menu}", subitem.id());
        focus.request_activate_by_name(&section, &panel, subitem.id().as_str());

        if !subitem.has_children() {
            return;
        }

        if let Some(control) = focus.active_control() {
            focus.trigger(control);
        }
    }

    /// Remembers the active focus control and deactivates it, so the menu
    /// highlight is the only visible focus indicator.
    ///
    /// Nothing is saved while the focus indicator is hidden.
    pub fn save_focus_control(&mut self, shell: &mut Shell<'_, Notification>) {
        let focus = shell.focus();

        if !focus.is_highlight_visible() {
            return;
        }

        if let Some(control) = focus.active_control() {
            self.state.save_control(control);
            focus.set_active(control, false);
        }
    }

    /// Asks the saved focus control, if any, to become active again.
    pub fn restore_focus_control(&mut self, shell: &mut Shell<'_, Notification>) {
        if let Some(control) = self.state.take_saved_control() {
            shell.focus().request_active(control);
        }
    }

    fn highlight(&mut self, id: MenuId, shell: &mut Shell<'_, Notification>) {
        if self.state.highlight(id.clone()) {
            log::debug!("Menu navigation: highlighted {id}");
            shell.publish(Notification::HighlightedMenuChanged(Some(id)));
        }
    }

    /// Drops a session whose highlighted menu left the model.
    fn revalidate(&mut self, shell: &mut Shell<'_, Notification>) {
        let Some(id) = self.state.highlighted() else {
            return;
        };

        if self.menu.position(id).is_none() {
            log::warn!("Menu navigation: highlighted menu {id} no longer exists");
            self.end_session(shell);
        }
    }

    fn context(&self) -> Context<'_> {
        Context {
            state: &self.state,
            menu: &self.menu,
            keys: &self.keys,
            settings: &self.settings,
            app_window: self.app_window,
        }
    }
}
