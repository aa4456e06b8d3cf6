//! Application State

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Shell document served for client-side routes
    pub index_html: Arc<str>,

    /// Startup configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Check the bundle directory and read its `index.html`
    pub fn load(config: ServerConfig) -> Result<Self> {
        if !config.static_dir.is_dir() {
            return Err(ServerError::MissingStaticDir(config.static_dir.clone()));
        }

        let index_path = config.index_path();
        if !index_path.is_file() {
            return Err(ServerError::MissingIndex(index_path));
        }
        let index_html = std::fs::read_to_string(&index_path)?;

        Ok(Self {
            index_html: index_html.into(),
            config: Arc::new(config),
        })
    }
}
