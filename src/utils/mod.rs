//! Miscellaneous helpers shared across modules.

pub mod text_processing;
