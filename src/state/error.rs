//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Catalog has nothing to mount
    #[error("Catalog has no screens to show")]
    NoScreens,

    /// Screen index out of range
    #[error("Screen not found: {index}")]
    ScreenNotFound { index: usize },
}
