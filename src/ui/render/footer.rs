use super::Frame;
use crate::catalog::Layout as ScreenLayout;
use crate::config::hotkeys::build_footer_text;
use crate::config::HotkeyAction;
use crate::state::State;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Hints shown while browsing. Accordion screens have no category filter,
/// so its keys are left out there.
///
fn browse_actions(layout: ScreenLayout) -> Vec<(HotkeyAction, &'static str, Option<HotkeyAction>)> {
    let mut actions = vec![(
        HotkeyAction::NavigateNext,
        "move",
        Some(HotkeyAction::NavigatePrev),
    )];
    if layout == ScreenLayout::List {
        actions.push((
            HotkeyAction::CategoryPrev,
            "category",
            Some(HotkeyAction::CategoryNext),
        ));
        actions.push((HotkeyAction::ResetFilter, "all", None));
    }
    actions.extend([
        (HotkeyAction::ToggleExpand, "expand", None),
        (
            HotkeyAction::ScreenPrev,
            "screen",
            Some(HotkeyAction::ScreenNext),
        ),
        (HotkeyAction::SwitchFocus, "focus", None),
        (HotkeyAction::EnterSearch, "search", None),
        (HotkeyAction::ToggleLog, "log", None),
        (HotkeyAction::CycleTheme, "theme", None),
        (HotkeyAction::Quit, "quit", None),
    ]);
    actions
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let keymap = state.get_keymap();
    let theme = state.get_theme();

    let (mode, mode_color, controls_text) = if state.is_search_mode() {
        (
            "SEARCH:",
            theme.footer_search,
            format!(
                " Type to search,{}",
                build_footer_text(
                    &keymap.search_mode,
                    &[
                        (HotkeyAction::SearchModeConfirm, "keep", None),
                        (HotkeyAction::SearchModeExit, "clear", None),
                    ],
                )
            ),
        )
    } else {
        let actions = browse_actions(state.current_screen().layout);
        ("NORMAL:", theme.footer_normal, build_footer_text(&keymap.browse, &actions))
    };

    let controls_content = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.text.to_color())
                .bg(mode_color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(controls_text, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    // Show the query while one is applied, otherwise the version
    let query = state.get_search_query();
    let right_content = if state.is_search_mode() {
        Line::from(vec![Span::styled(
            format!("/{}", query),
            Style::default()
                .fg(theme.text.to_color())
                .bg(theme.footer_search.to_color())
                .add_modifier(Modifier::BOLD),
        )])
    } else if !query.is_empty() {
        Line::from(vec![Span::styled(
            format!("/{}", query),
            Style::default().fg(theme.text_muted.to_color()),
        )])
    } else {
        Line::from(vec![Span::styled(
            format!(" {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.accent.to_color()),
        )])
    };

    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Keymap;

    #[test]
    fn list_hints_include_category_keys() {
        let text = build_footer_text(&Keymap::default().browse, &browse_actions(ScreenLayout::List));
        assert!(text.contains("h/l: category"));
        assert!(text.contains("0: all"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn accordion_hints_leave_out_category_keys() {
        let actions = browse_actions(ScreenLayout::Accordion);
        assert!(!actions
            .iter()
            .any(|(action, _, _)| matches!(action, HotkeyAction::CategoryPrev | HotkeyAction::ResetFilter)));
        let text = build_footer_text(&Keymap::default().browse, &actions);
        assert!(!text.contains("category"));
        assert!(text.contains("Enter: expand"));
    }
}
