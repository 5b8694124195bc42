//! Terminal browser for creator marketplace and club catalogs.
//!
//! Every screen is driven by the same presentational state: a category
//! registry, a single-select category filter, and accordion expansion state.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;
pub mod utils;
