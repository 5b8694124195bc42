//! Event handling module.
//!
//! Terminal events: key presses polled on a background thread and applied
//! to state on the render loop.

pub mod terminal;
