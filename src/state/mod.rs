//! Application state management module.
//!
//! This module contains:
//! - The category filter and its pure derivation (`filter`)
//! - Single and multi expand accordion state (`expansion`)
//! - The per-screen state bundle created on every mount (`screen`)
//! - The application-wide `State` that owns the mounted screen
//! - Navigation types and state errors

mod error;
pub mod expansion;
pub mod filter;
mod navigation;
pub mod screen;

pub use error::StateError;
pub use expansion::{ExpandedKeys, NestedExpansion, SectionExpansion};
pub use filter::{filter_items, FilterState};
pub use navigation::Focus;
pub use screen::{Row, ScreenState};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
