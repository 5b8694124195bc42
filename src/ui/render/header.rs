use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the banner with the catalog name and active skin.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let catalog = state.get_catalog();
    let line = Line::from(vec![
        Span::styled(format!(" {}", catalog.name), styling::banner_style(theme)),
        Span::styled(format!("  {}", catalog.skin), styling::muted_text_style(theme)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Left).block(block),
        size,
    );
}
