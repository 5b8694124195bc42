use super::*;
use crate::catalog::Layout as ScreenLayout;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const SCREENS_WIDTH: u16 = 22;
const LOG_HEIGHT: u16 = 8;

/// Render every widget according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(1)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    header(frame, rows[0], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SCREENS_WIDTH), Constraint::Min(1)])
        .split(rows[1]);
    screens(frame, body[0], state);

    let screen = state.current_screen();
    if screen.layout == ScreenLayout::List && !screen.categories.is_empty() {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(body[1]);
        categories(frame, main[0], state);
        content(frame, main[1], state);
    } else {
        content(frame, body[1], state);
    }

    if state.is_log_visible() {
        log(frame, rows[2], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}
