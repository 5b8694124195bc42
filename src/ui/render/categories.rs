use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
};

/// Render the category tabs of a list screen. The selected tab follows the
/// filter; an unknown selection highlights nothing.
///
pub fn categories(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let registry = &state.current_screen().categories;
    let titles: Vec<Line> = registry
        .as_slice()
        .iter()
        .map(|category| Line::from(category.display_label()))
        .collect();
    let selected = registry
        .position(state.screen_state().filter().selected())
        .unwrap_or(registry.len());

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme))
                .title("Categories"),
        )
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::selected_tab_style(theme))
        .select(selected)
        .divider("|");
    frame.render_widget(tabs, size);
}
