use super::Frame;
use crate::catalog::{Category, ContentItem, Layout, Screen};
use crate::config::HotkeyAction;
use crate::config::hotkeys::format_hotkey_display;
use crate::state::{Focus, Row, ScreenState, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use crate::utils::text_processing::{paragraphs, wrap_words};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const ITEM_INDENT: &str = "  ";
const CLOSED_MARKER: &str = "▸ ";
const OPEN_MARKER: &str = "▾ ";

/// Render the rows of the mounted screen according to state.
///
pub fn content(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = *state.current_focus() == Focus::Content;
    let reset_hint = state
        .get_keymap()
        .browse
        .get(&HotkeyAction::ResetFilter)
        .map(format_hotkey_display);
    let (screen, screen_state) = state.screen_and_state_mut();

    let title = if screen_state.search_query().is_empty() {
        screen.title.clone()
    } else {
        format!("{} /{}", screen.title, screen_state.search_query())
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(title, styling::active_block_title_style()));
    } else {
        block = block.title(title);
    }

    let rows = screen_state.rows(screen);
    if rows.is_empty() {
        let mut lines = vec![Line::from(Span::styled(
            screen.empty_message.clone(),
            styling::muted_text_style(&theme),
        ))];
        if screen_state.filter().is_filtered() || !screen_state.search_query().is_empty() {
            if let Some(key) = reset_hint {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Press {} to show everything.", key),
                    styling::normal_text_style(&theme),
                )));
            }
        }
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            size,
        );
        return;
    }

    let width = size.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            Row::Section(category) => section_row(category, screen, screen_state, &theme),
            Row::Item(item) => {
                let indent = match screen.layout {
                    Layout::Accordion => ITEM_INDENT,
                    Layout::List => "",
                };
                let open = screen_state.expanded().is_expanded(&item.key);
                item_row(item, indent, open, width, &theme)
            }
        })
        .collect();

    let highlight = if focused {
        styling::active_list_item_style(&theme)
    } else {
        styling::current_list_item_style(&theme)
    };
    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(highlight)
        .block(block);
    frame.render_stateful_widget(list, size, screen_state.list_state_mut());
}

/// Header row of an accordion section with its item count.
///
fn section_row<'a>(
    category: &Category,
    screen: &Screen,
    screen_state: &ScreenState,
    theme: &Theme,
) -> ListItem<'a> {
    let (marker, count) = match category.id.as_deref() {
        Some(id) => (
            if screen_state.sections().is_expanded(id) {
                OPEN_MARKER
            } else {
                CLOSED_MARKER
            },
            screen_state.section_items(screen, id).len(),
        ),
        None => (CLOSED_MARKER, 0),
    };
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{}{}", marker, category.display_label()),
            styling::section_header_style(theme),
        ),
        Span::styled(format!(" ({})", count), styling::muted_text_style(theme)),
    ]))
}

/// Item row; open items also show the wrapped body and metadata.
///
fn item_row<'a>(
    item: &ContentItem,
    indent: &str,
    open: bool,
    width: usize,
    theme: &Theme,
) -> ListItem<'a> {
    let marker = if open { OPEN_MARKER } else { CLOSED_MARKER };
    let mut title = vec![Span::styled(
        format!("{}{}{}", indent, marker, item.title),
        styling::normal_text_style(theme),
    )];
    if let Some(date) = item.formatted_date() {
        title.push(Span::styled(format!("  {}", date), styling::muted_text_style(theme)));
    }
    let mut lines = vec![Line::from(title)];

    let detail_indent = format!("{}  ", indent);
    let wrap_width = width.saturating_sub(detail_indent.chars().count());
    if !item.summary.is_empty() {
        for line in wrap_words(&item.summary, wrap_width) {
            lines.push(Line::from(Span::styled(
                format!("{}{}", detail_indent, line),
                styling::muted_text_style(theme),
            )));
        }
    }

    if open {
        for paragraph in paragraphs(&item.body) {
            lines.push(Line::from(""));
            for line in wrap_words(&paragraph, wrap_width) {
                lines.push(Line::from(Span::styled(
                    format!("{}{}", detail_indent, line),
                    styling::normal_text_style(theme),
                )));
            }
        }
        if !item.meta.is_empty() {
            lines.push(Line::from(""));
        }
        for (key, value) in &item.meta {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}{}: ", detail_indent, key),
                    styling::muted_text_style(theme),
                ),
                Span::styled(value.clone(), styling::normal_text_style(theme)),
            ]));
        }
    }
    ListItem::new(lines)
}
