//! Error Types

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for server setup
pub type Result<T> = std::result::Result<T, ServerError>;

/// Server setup errors
#[derive(Error, Debug)]
pub enum ServerError {
    /// `BIND_ADDR` is not a socket address
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Static directory does not exist
    #[error("Static directory not found: {}", .0.display())]
    MissingStaticDir(PathBuf),

    /// Bundle has no `index.html` to serve as the shell
    #[error("Shell index not found: {}", .0.display())]
    MissingIndex(PathBuf),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
