use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Screens";

/// Render the screen menu according to state.
///
pub fn screens(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));

    let list_item_style;
    if *state.current_focus() == Focus::Screens {
        list_item_style = styling::active_list_item_style(&theme);
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    } else {
        list_item_style = styling::current_list_item_style(&theme);
        block = block.title(BLOCK_TITLE);
    }

    let items: Vec<ListItem> = state
        .get_catalog()
        .screens
        .iter()
        .map(|screen| {
            ListItem::new(Line::from(vec![Span::styled(
                screen.title.clone(),
                styling::normal_text_style(&theme),
            )]))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(list_item_style)
        .block(block);
    frame.render_stateful_widget(list, size, state.get_screens_list_state());
}
