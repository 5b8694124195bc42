//! Per-screen presentational state.
//!
//! A `ScreenState` is created when a screen is mounted and dropped when the
//! user navigates away, so nothing leaks between screens.

use super::expansion::{ExpandedKeys, NestedExpansion, SectionExpansion};
use super::filter::{filter_items, FilterState};
use crate::catalog::{Category, CategoryRegistry, ContentItem, Layout, Screen};
use crate::utils::text_processing::search_pattern;
use log::*;
use ratatui::widgets::ListState;

/// A selectable row of the rendered screen.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row<'a> {
    Section(&'a Category),
    Item(&'a ContentItem),
}

/// Houses filter, expansion, search and cursor state for one mounted screen.
///
#[derive(Debug, Default)]
pub struct ScreenState {
    filter: FilterState,
    expanded: ExpandedKeys,
    sections: SectionExpansion,
    nested_expansion: NestedExpansion,
    search_query: String,
    list_state: ListState,
}

impl ScreenState {
    /// Build fresh state for `screen`: unfiltered, no items open, first
    /// section open, cursor on the first row.
    ///
    pub fn mount(screen: &Screen, nested_expansion: NestedExpansion) -> Self {
        debug!("Mounting screen '{}'...", screen.id);
        let mut state = ScreenState {
            filter: FilterState::new(),
            expanded: ExpandedKeys::new(),
            sections: SectionExpansion::new(&screen.categories),
            nested_expansion,
            search_query: String::new(),
            list_state: ListState::default(),
        };
        state.clamp_cursor(screen);
        state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn expanded(&self) -> &ExpandedKeys {
        &self.expanded
    }

    pub fn sections(&self) -> &SectionExpansion {
        &self.sections
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Items passing the category filter and the search query, in catalog
    /// order.
    ///
    pub fn visible_items<'a>(&self, screen: &'a Screen) -> Vec<&'a ContentItem> {
        self.search(self.filter.apply(&screen.items))
    }

    /// Items of one section that pass the search query.
    ///
    pub fn section_items<'a>(&self, screen: &'a Screen, section_id: &str) -> Vec<&'a ContentItem> {
        self.search(filter_items(&screen.items, Some(section_id)))
    }

    fn search<'a>(&self, items: Vec<&'a ContentItem>) -> Vec<&'a ContentItem> {
        match search_pattern(&self.search_query) {
            Some(pattern) => items
                .into_iter()
                .filter(|item| pattern.is_match(&item.title) || pattern.is_match(&item.summary))
                .collect(),
            None => items,
        }
    }

    /// Selectable rows in display order.
    ///
    /// List screens show one row per visible item. Accordion screens show a
    /// row per concrete category, followed by its items while it is open.
    pub fn rows<'a>(&self, screen: &'a Screen) -> Vec<Row<'a>> {
        match screen.layout {
            Layout::List => self.visible_items(screen).into_iter().map(Row::Item).collect(),
            Layout::Accordion => {
                let mut rows = vec![];
                for category in screen.categories.concrete() {
                    rows.push(Row::Section(category));
                    if let Some(id) = category.id.as_deref() {
                        if self.sections.is_expanded(id) {
                            rows.extend(self.section_items(screen, id).into_iter().map(Row::Item));
                        }
                    }
                }
                rows
            }
        }
    }

    /// Row under the cursor.
    ///
    pub fn current_row<'a>(&self, screen: &'a Screen) -> Option<Row<'a>> {
        let index = self.cursor()?;
        self.rows(screen).into_iter().nth(index)
    }

    /// Move the cursor down, wrapping to the top.
    ///
    pub fn next_row(&mut self, screen: &Screen) -> &mut Self {
        let len = self.rows(screen).len();
        if len == 0 {
            self.list_state.select(None);
            return self;
        }
        let next = match self.cursor() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
        self
    }

    /// Move the cursor up, wrapping to the bottom.
    ///
    pub fn previous_row(&mut self, screen: &Screen) -> &mut Self {
        let len = self.rows(screen).len();
        if len == 0 {
            self.list_state.select(None);
            return self;
        }
        let previous = match self.cursor() {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(previous));
        self
    }

    /// Toggle whatever sits under the cursor: an item's detail or a
    /// section's accordion.
    ///
    pub fn toggle_current(&mut self, screen: &Screen) -> &mut Self {
        match self.current_row(screen) {
            Some(Row::Item(item)) => {
                self.expanded.toggle(&item.key);
            }
            Some(Row::Section(category)) => {
                if let Some(id) = category.id.as_deref() {
                    self.toggle_section(screen, id);
                }
            }
            None => {}
        }
        self.clamp_cursor(screen);
        self
    }

    /// Toggle a section, honouring the nested expansion policy for the
    /// section that closes.
    ///
    pub fn toggle_section(&mut self, screen: &Screen, id: &str) -> &mut Self {
        let closed = self.sections.toggle_section(id);
        if let (Some(closed), NestedExpansion::Reset) = (closed, self.nested_expansion) {
            let keys: Vec<&str> = filter_items(&screen.items, Some(closed.as_str()))
                .into_iter()
                .map(|item| item.key.as_str())
                .collect();
            self.expanded.collapse_where(|k| keys.contains(&k));
            debug!("Collapsed nested items of section '{}'", closed);
        }
        self
    }

    /// Toggle a single item's detail by key.
    ///
    pub fn toggle_item(&mut self, key: &str) -> &mut Self {
        self.expanded.toggle(key);
        self
    }

    /// Replace the category selection. Expansion state is kept. Accordion
    /// screens show every section, so they have no selection to change.
    ///
    pub fn select_category(&mut self, screen: &Screen, category_id: Option<String>) -> &mut Self {
        if screen.layout == Layout::Accordion {
            debug!("Ignoring category selection on accordion screen '{}'", screen.id);
            return self;
        }
        self.filter.select(category_id);
        self.list_state.select(None);
        self.clamp_cursor(screen);
        self
    }

    /// Select the registry entry after the current one, wrapping around.
    ///
    pub fn next_category(&mut self, screen: &Screen) -> &mut Self {
        let next = step(&screen.categories, self.filter.selected(), 1);
        self.select_category(screen, next)
    }

    /// Select the registry entry before the current one, wrapping around.
    ///
    pub fn previous_category(&mut self, screen: &Screen) -> &mut Self {
        let previous = step(&screen.categories, self.filter.selected(), -1);
        self.select_category(screen, previous)
    }

    /// Return to the unfiltered view.
    ///
    pub fn reset_filter(&mut self, screen: &Screen) -> &mut Self {
        self.select_category(screen, None)
    }

    pub fn push_search_char(&mut self, screen: &Screen, c: char) -> &mut Self {
        self.search_query.push(c);
        self.list_state.select(None);
        self.clamp_cursor(screen);
        self
    }

    pub fn pop_search_char(&mut self, screen: &Screen) -> &mut Self {
        self.search_query.pop();
        self.clamp_cursor(screen);
        self
    }

    pub fn clear_search(&mut self, screen: &Screen) -> &mut Self {
        self.search_query.clear();
        self.clamp_cursor(screen);
        self
    }

    /// Keep the cursor inside the current rows.
    ///
    fn clamp_cursor(&mut self, screen: &Screen) {
        let len = self.rows(screen).len();
        let cursor = match (self.cursor(), len) {
            (_, 0) => None,
            (Some(i), len) if i < len => Some(i),
            (Some(_), len) => Some(len - 1),
            (None, _) => Some(0),
        };
        self.list_state.select(cursor);
    }
}

/// Id of the registry entry `delta` steps away from `current`. Unknown
/// selections restart from the first entry.
///
fn step(registry: &CategoryRegistry, current: Option<&str>, delta: isize) -> Option<String> {
    let len = registry.len() as isize;
    if len == 0 {
        return None;
    }
    let index = match registry.position(current) {
        Some(i) => (i as isize + delta).rem_euclid(len),
        None => 0,
    };
    registry.get(index as usize).and_then(|c| c.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn list_screen() -> Screen {
        Screen {
            id: "events".to_string(),
            title: "Events".to_string(),
            layout: Layout::List,
            empty_message: "None".to_string(),
            categories: CategoryRegistry::new(vec![
                Category::all("All"),
                Category::new("A", "Alpha"),
                Category::new("B", "Beta"),
            ])
            .unwrap(),
            items: vec![
                ContentItem::new("x", Some("A")),
                ContentItem::new("y", Some("A")),
            ],
        }
    }

    fn faq_screen() -> Screen {
        Screen {
            id: "faq".to_string(),
            title: "FAQ".to_string(),
            layout: Layout::Accordion,
            empty_message: "None".to_string(),
            categories: CategoryRegistry::new(vec![
                Category::new("cat1", "One"),
                Category::new("cat2", "Two"),
            ])
            .unwrap(),
            items: vec![
                ContentItem::new("q1", Some("cat1")),
                ContentItem::new("q2", Some("cat1")),
                ContentItem::new("q3", Some("cat2")),
            ],
        }
    }

    fn row_keys(rows: &[Row]) -> Vec<String> {
        rows.iter()
            .map(|row| match row {
                Row::Section(c) => format!("#{}", c.id.clone().unwrap_or_default()),
                Row::Item(i) => i.key.clone(),
            })
            .collect()
    }

    #[test]
    fn mount_starts_unfiltered_with_cursor_on_first_row() {
        let screen = list_screen();
        let state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        assert_eq!(state.filter().selected(), None);
        assert!(state.expanded().is_empty());
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn mount_opens_first_section() {
        let screen = faq_screen();
        let state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        assert_eq!(state.sections().expanded(), Some("cat1"));
        assert_eq!(row_keys(&state.rows(&screen)), vec!["#cat1", "q1", "q2", "#cat2"]);
    }

    #[test]
    fn category_cycling_wraps() {
        let screen = list_screen();
        let mut state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        state.next_category(&screen);
        assert_eq!(state.filter().selected(), Some("A"));
        state.next_category(&screen);
        assert_eq!(state.filter().selected(), Some("B"));
        state.next_category(&screen);
        assert_eq!(state.filter().selected(), None);
        state.previous_category(&screen);
        assert_eq!(state.filter().selected(), Some("B"));
    }

    #[test]
    fn empty_category_clears_cursor() {
        let screen = list_screen();
        let mut state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        state.select_category(&screen, Some("B".to_string()));
        assert!(state.visible_items(&screen).is_empty());
        assert_eq!(state.cursor(), None);
        state.reset_filter(&screen);
        assert_eq!(state.visible_items(&screen).len(), 2);
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn changing_category_keeps_expansion() {
        let screen = list_screen();
        let mut state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        state.toggle_current(&screen);
        assert!(state.expanded().is_expanded("x"));
        state.next_category(&screen);
        state.next_category(&screen);
        state.reset_filter(&screen);
        assert!(state.expanded().is_expanded("x"));
    }

    #[test]
    fn accordion_ignores_category_selection() {
        let screen = faq_screen();
        let mut state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        let before = row_keys(&state.rows(&screen));
        state.next_category(&screen);
        state.previous_category(&screen);
        state.select_category(&screen, Some("cat2".to_string()));
        assert_eq!(state.filter().selected(), None);
        state.reset_filter(&screen);
        assert_eq!(state.filter().selected(), None);
        assert_eq!(row_keys(&state.rows(&screen)), before);
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn row_navigation_wraps() {
        let screen = list_screen();
        let mut state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        state.next_row(&screen);
        assert_eq!(state.cursor(), Some(1));
        state.next_row(&screen);
        assert_eq!(state.cursor(), Some(0));
        state.previous_row(&screen);
        assert_eq!(state.cursor(), Some(1));
    }

    #[test]
    fn nested_items_survive_collapse_by_default() {
        let screen = faq_screen();
        let mut state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        state.next_row(&screen);
        state.toggle_current(&screen);
        assert!(state.expanded().is_expanded("q1"));

        state.toggle_section(&screen, "cat1");
        assert_eq!(state.sections().expanded(), None);
        state.toggle_section(&screen, "cat1");
        assert!(state.expanded().is_expanded("q1"));
    }

    #[test]
    fn nested_items_reset_on_collapse_when_configured() {
        let screen = faq_screen();
        let mut state = ScreenState::mount(&screen, NestedExpansion::Reset);
        state.toggle_item("q1").toggle_item("q3");

        state.toggle_section(&screen, "cat2");
        assert!(!state.expanded().is_expanded("q1"));
        assert!(state.expanded().is_expanded("q3"));
    }

    #[test]
    fn toggle_current_on_section_row() {
        let screen = faq_screen();
        let mut state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        state.previous_row(&screen);
        assert_eq!(state.current_row(&screen), Some(Row::Section(screen.categories.get(1).unwrap())));
        state.toggle_current(&screen);
        assert_eq!(state.sections().expanded(), Some("cat2"));
        assert_eq!(row_keys(&state.rows(&screen)), vec!["#cat1", "#cat2", "q3"]);
    }

    #[test]
    fn search_narrows_filtered_items() {
        let mut screen = list_screen();
        screen.items[0].title = "Rooftop Mixer".to_string();
        screen.items[1].title = "Sunrise Yoga".to_string();
        let mut state = ScreenState::mount(&screen, NestedExpansion::Preserve);
        for c in "YOGA".chars() {
            state.push_search_char(&screen, c);
        }
        let keys: Vec<&str> = state.visible_items(&screen).iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["y"]);
        state.clear_search(&screen);
        assert_eq!(state.visible_items(&screen).len(), 2);
    }

    #[test]
    fn step_restarts_for_unknown_selection() {
        let screen = list_screen();
        assert_eq!(step(&screen.categories, Some("Z"), 1), None);
        assert_eq!(step(&CategoryRegistry::default(), None, 1), None);
    }
}
