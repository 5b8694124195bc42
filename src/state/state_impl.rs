use crate::catalog::{Catalog, Layout, Screen};
use crate::config::Keymap;
use crate::logger::LogBuffer;
use crate::ui::Theme;
use log::*;
use ratatui::widgets::ListState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::error::StateError;
use super::expansion::NestedExpansion;
use super::navigation::Focus;
use super::screen::ScreenState;

/// Houses data representative of application state.
///
/// Only the mounted screen has a `ScreenState`. Switching screens drops it
/// and mounts a fresh one for the new screen.
pub struct State {
    catalog: Catalog,
    current_screen: usize,
    screen_state: ScreenState,
    screens_list_state: ListState,
    nested_expansion: NestedExpansion,
    current_focus: Focus,
    search_mode: bool,
    show_log: bool,
    log_entries: LogBuffer,
    theme: Theme,
    keymap: Keymap,
}

impl State {
    /// Return state showing the catalog's first screen.
    ///
    pub fn new(
        catalog: Catalog,
        nested_expansion: NestedExpansion,
        theme: Theme,
        keymap: Keymap,
        log_entries: LogBuffer,
    ) -> Result<State, StateError> {
        let first = catalog.screen(0).ok_or(StateError::NoScreens)?;
        let screen_state = ScreenState::mount(first, nested_expansion);
        let mut screens_list_state = ListState::default();
        screens_list_state.select(Some(0));
        Ok(State {
            catalog,
            current_screen: 0,
            screen_state,
            screens_list_state,
            nested_expansion,
            current_focus: Focus::Content,
            search_mode: false,
            show_log: false,
            log_entries,
            theme,
            keymap,
        })
    }

    /// Return state with defaults around `catalog`, detached from any logger.
    ///
    pub fn with_catalog(catalog: Catalog) -> Result<State, StateError> {
        State::new(
            catalog,
            NestedExpansion::default(),
            Theme::default(),
            Keymap::default(),
            Arc::new(Mutex::new(VecDeque::new())),
        )
    }

    pub fn get_catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next theme and return its name.
    ///
    pub fn cycle_theme(&mut self) -> &str {
        self.theme = self.theme.next();
        info!("Switched theme to {}", self.theme.name);
        &self.theme.name
    }

    pub fn get_keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    pub fn focus_screens(&mut self) -> &mut Self {
        debug!("Focusing screen menu...");
        self.current_focus = Focus::Screens;
        self
    }

    pub fn focus_content(&mut self) -> &mut Self {
        debug!("Focusing screen content...");
        self.current_focus = Focus::Content;
        self
    }

    pub fn toggle_focus(&mut self) -> &mut Self {
        self.current_focus = self.current_focus.toggle();
        debug!("Focus moved to {:?}", self.current_focus);
        self
    }

    pub fn current_screen_index(&self) -> usize {
        self.current_screen
    }

    /// The mounted screen.
    ///
    pub fn current_screen(&self) -> &Screen {
        &self.catalog.screens[self.current_screen]
    }

    pub fn screen_state(&self) -> &ScreenState {
        &self.screen_state
    }

    /// Borrow the mounted screen together with its mutable state, for
    /// rendering stateful widgets.
    ///
    pub fn screen_and_state_mut(&mut self) -> (&Screen, &mut ScreenState) {
        (
            &self.catalog.screens[self.current_screen],
            &mut self.screen_state,
        )
    }

    pub fn get_screens_list_state(&mut self) -> &mut ListState {
        &mut self.screens_list_state
    }

    /// Unmount the current screen and mount the one at `index` with fresh
    /// state.
    ///
    pub fn select_screen(&mut self, index: usize) -> Result<&mut Self, StateError> {
        let screen = self
            .catalog
            .screen(index)
            .ok_or(StateError::ScreenNotFound { index })?;
        info!("Opening {} screen", screen.title);
        self.screen_state = ScreenState::mount(screen, self.nested_expansion);
        self.current_screen = index;
        self.screens_list_state.select(Some(index));
        self.search_mode = false;
        Ok(self)
    }

    pub fn next_screen(&mut self) -> &mut Self {
        let next = (self.current_screen + 1) % self.catalog.screen_count();
        self.mount_in_range(next)
    }

    pub fn previous_screen(&mut self) -> &mut Self {
        let count = self.catalog.screen_count();
        let previous = (self.current_screen + count - 1) % count;
        self.mount_in_range(previous)
    }

    fn mount_in_range(&mut self, index: usize) -> &mut Self {
        if let Err(e) = self.select_screen(index) {
            error!("Failed to open screen: {}", e);
        }
        self
    }

    /// Move down within the focused pane.
    ///
    pub fn next_row(&mut self) -> &mut Self {
        match self.current_focus {
            Focus::Screens => self.next_screen(),
            Focus::Content => {
                let (screen, state) = self.screen_and_state_mut();
                state.next_row(screen);
                self
            }
        }
    }

    /// Move up within the focused pane.
    ///
    pub fn previous_row(&mut self) -> &mut Self {
        match self.current_focus {
            Focus::Screens => self.previous_screen(),
            Focus::Content => {
                let (screen, state) = self.screen_and_state_mut();
                state.previous_row(screen);
                self
            }
        }
    }

    pub fn next_category(&mut self) -> &mut Self {
        let (screen, state) = self.screen_and_state_mut();
        state.next_category(screen);
        self
    }

    pub fn previous_category(&mut self) -> &mut Self {
        let (screen, state) = self.screen_and_state_mut();
        state.previous_category(screen);
        self
    }

    /// Select a category by id on the mounted screen. Unknown ids are
    /// accepted and simply match nothing.
    ///
    pub fn select_category(&mut self, category_id: Option<String>) -> &mut Self {
        let (screen, state) = self.screen_and_state_mut();
        if let (Some(id), Layout::List) = (category_id.as_deref(), screen.layout) {
            if !screen.categories.contains(id) {
                warn!("Category '{}' is not offered by {}", id, screen.title);
            }
        }
        state.select_category(screen, category_id);
        self
    }

    pub fn reset_filter(&mut self) -> &mut Self {
        let (screen, state) = self.screen_and_state_mut();
        state.reset_filter(screen);
        self
    }

    /// Toggle the row under the cursor. With the menu focused, this opens
    /// the highlighted screen instead.
    ///
    pub fn toggle_current(&mut self) -> &mut Self {
        match self.current_focus {
            Focus::Screens => self.focus_content(),
            Focus::Content => {
                let (screen, state) = self.screen_and_state_mut();
                state.toggle_current(screen);
                self
            }
        }
    }

    pub fn is_search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn enter_search_mode(&mut self) -> &mut Self {
        debug!("Entering search mode...");
        self.search_mode = true;
        self.current_focus = Focus::Content;
        self
    }

    /// Leave search mode, keeping the query applied.
    ///
    pub fn confirm_search(&mut self) -> &mut Self {
        self.search_mode = false;
        self
    }

    /// Leave search mode and drop the query.
    ///
    pub fn exit_search_mode(&mut self) -> &mut Self {
        debug!("Exiting search mode...");
        self.search_mode = false;
        let (screen, state) = self.screen_and_state_mut();
        state.clear_search(screen);
        self
    }

    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        let (screen, state) = self.screen_and_state_mut();
        state.push_search_char(screen, c);
        self
    }

    pub fn backspace_search(&mut self) -> &mut Self {
        let (screen, state) = self.screen_and_state_mut();
        state.pop_search_char(screen);
        self
    }

    pub fn get_search_query(&self) -> &str {
        self.screen_state.search_query()
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Snapshot of the most recent `limit` log entries, oldest first.
    ///
    pub fn get_log_entries(&self, limit: usize) -> Vec<String> {
        match self.log_entries.lock() {
            Ok(guard) => {
                let skip = guard.len().saturating_sub(limit);
                guard.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Skin;
    use crate::logger::push_entry;

    fn club() -> State {
        State::with_catalog(Catalog::builtin(Skin::Club).unwrap()).unwrap()
    }

    #[test]
    fn new_mounts_first_screen() {
        let state = club();
        assert_eq!(state.current_screen_index(), 0);
        assert_eq!(state.current_screen().id, "events");
        assert_eq!(state.screen_state().filter().selected(), None);
        assert_eq!(*state.current_focus(), Focus::Content);
    }

    #[test]
    fn new_rejects_empty_catalog() {
        let mut catalog = Catalog::builtin(Skin::Club).unwrap();
        catalog.screens.clear();
        assert!(matches!(
            State::with_catalog(catalog),
            Err(StateError::NoScreens)
        ));
    }

    #[test]
    fn switching_screens_remounts_fresh_state() {
        let mut state = club();
        state.next_category();
        state.toggle_current();
        assert!(state.screen_state().filter().is_filtered());
        assert!(!state.screen_state().expanded().is_empty());

        state.next_screen();
        assert_eq!(state.current_screen().id, "menu");
        assert_eq!(state.screen_state().filter().selected(), None);
        assert!(state.screen_state().expanded().is_empty());

        state.previous_screen();
        assert_eq!(state.current_screen().id, "events");
        assert_eq!(state.screen_state().filter().selected(), None);
        assert!(state.screen_state().expanded().is_empty());
    }

    #[test]
    fn screen_navigation_wraps() {
        let mut state = club();
        let count = state.get_catalog().screen_count();
        state.previous_screen();
        assert_eq!(state.current_screen_index(), count - 1);
        state.next_screen();
        assert_eq!(state.current_screen_index(), 0);
    }

    #[test]
    fn select_screen_out_of_range() {
        let mut state = club();
        assert!(matches!(
            state.select_screen(99),
            Err(StateError::ScreenNotFound { index: 99 })
        ));
        assert_eq!(state.current_screen_index(), 0);
    }

    #[test]
    fn faq_screen_opens_first_section() {
        let mut state = club();
        let faq = state
            .get_catalog()
            .screens
            .iter()
            .position(|s| s.id == "faq")
            .unwrap();
        state.select_screen(faq).unwrap();
        assert_eq!(state.screen_state().sections().expanded(), Some("membership"));
    }

    #[test]
    fn focus_routes_row_navigation() {
        let mut state = club();
        state.focus_screens();
        state.next_row();
        assert_eq!(state.current_screen_index(), 1);
        state.toggle_current();
        assert_eq!(*state.current_focus(), Focus::Content);
        state.next_row();
        assert_eq!(state.screen_state().cursor(), Some(1));
    }

    #[test]
    fn unknown_category_yields_empty_view() {
        let mut state = club();
        state.select_category(Some("karaoke".to_string()));
        let (screen, screen_state) = state.screen_and_state_mut();
        assert!(screen_state.visible_items(screen).is_empty());
        state.reset_filter();
        let (screen, screen_state) = state.screen_and_state_mut();
        assert_eq!(screen_state.visible_items(screen).len(), screen.items.len());
    }

    #[test]
    fn category_keys_do_nothing_on_faq_screen() {
        let mut state = club();
        let faq = state
            .get_catalog()
            .screens
            .iter()
            .position(|s| s.id == "faq")
            .unwrap();
        state.select_screen(faq).unwrap();
        state.next_category().previous_category().next_category();
        state.select_category(Some("bookings".to_string()));
        assert_eq!(state.screen_state().filter().selected(), None);
        assert_eq!(state.screen_state().sections().expanded(), Some("membership"));
    }

    #[test]
    fn search_mode_lifecycle() {
        let mut state = club();
        state.enter_search_mode();
        assert!(state.is_search_mode());
        state.add_search_char('y').add_search_char('o');
        assert_eq!(state.get_search_query(), "yo");
        state.backspace_search();
        assert_eq!(state.get_search_query(), "y");
        state.confirm_search();
        assert!(!state.is_search_mode());
        assert_eq!(state.get_search_query(), "y");
        state.enter_search_mode().exit_search_mode();
        assert_eq!(state.get_search_query(), "");
    }

    #[test]
    fn cycle_theme_changes_name() {
        let mut state = club();
        let before = state.get_theme().name.clone();
        let after = state.cycle_theme().to_string();
        assert_ne!(before, after);
    }

    #[test]
    fn log_entries_are_limited() {
        let state = club();
        for i in 0..5 {
            push_entry(&state.log_entries, format!("line {}", i));
        }
        assert_eq!(state.get_log_entries(2), vec!["line 3", "line 4"]);
        assert_eq!(state.get_log_entries(10).len(), 5);
    }

    #[test]
    fn toggle_log() {
        let mut state = club();
        assert!(!state.is_log_visible());
        state.toggle_log();
        assert!(state.is_log_visible());
    }
}
