use crate::config::hotkeys::{get_action_for_event, HotkeyAction, InputMode};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => Ok(true),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to state. Returns false when the user asked to quit.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    if state.is_search_mode() {
        handle_search_key(key, state);
        return true;
    }

    let Some(action) = get_action_for_event(&key, InputMode::Browse, state.get_keymap()) else {
        return true;
    };
    debug!("Processing {:?} for key '{:?}'...", action, key.code);
    match action {
        HotkeyAction::Quit => return false,
        HotkeyAction::NavigateNext => {
            state.next_row();
        }
        HotkeyAction::NavigatePrev => {
            state.previous_row();
        }
        HotkeyAction::CategoryNext => {
            state.next_category();
        }
        HotkeyAction::CategoryPrev => {
            state.previous_category();
        }
        HotkeyAction::ResetFilter => {
            state.reset_filter();
        }
        HotkeyAction::ToggleExpand => {
            state.toggle_current();
        }
        HotkeyAction::SwitchFocus => {
            state.toggle_focus();
        }
        HotkeyAction::ScreenNext => {
            state.next_screen();
        }
        HotkeyAction::ScreenPrev => {
            state.previous_screen();
        }
        HotkeyAction::EnterSearch => {
            state.enter_search_mode();
        }
        HotkeyAction::ToggleLog => {
            state.toggle_log();
        }
        HotkeyAction::CycleTheme => {
            state.cycle_theme();
        }
        HotkeyAction::SearchModeExit
        | HotkeyAction::SearchModeConfirm
        | HotkeyAction::SearchModeBackspace => {}
    }
    true
}

/// Route a key press while the search prompt is open.
///
fn handle_search_key(key: KeyEvent, state: &mut State) {
    match get_action_for_event(&key, InputMode::Search, state.get_keymap()) {
        Some(HotkeyAction::SearchModeExit) => {
            state.exit_search_mode();
        }
        Some(HotkeyAction::SearchModeConfirm) => {
            state.confirm_search();
        }
        Some(HotkeyAction::SearchModeBackspace) => {
            state.backspace_search();
        }
        _ => {
            if let KeyCode::Char(c) = key.code {
                if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT {
                    state.add_search_char(c);
                }
            }
        }
    }
}
