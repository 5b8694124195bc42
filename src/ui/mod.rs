//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal layout and the screen menu
//! - Category tabs, filtered lists and accordions
//! - Theme management and styling helpers

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
