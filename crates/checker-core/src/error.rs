//! Error Types

use thiserror::Error;

/// Result type alias for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;

/// Shell error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Path is not one of the literal app routes
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Mount target is not present in the document
    #[error("Mount container not found: #{0}")]
    MissingContainer(String),

    /// Application was already attached to the page
    #[error("Application already mounted")]
    AlreadyMounted,

    /// Browser DOM call failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShellError {
    /// Whether the failure leaves the page without any rendered tree
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShellError::MissingContainer(_) | ShellError::Dom(_) | ShellError::Config(_)
        )
    }
}
