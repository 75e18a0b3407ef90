//! Startup errors for the folio server.

use crate::config::ConfigError;

/// Anything that prevents the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `[package.metadata.leptos]` or `LEPTOS_*` settings are missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The embedded portfolio content failed to load.
    #[error("portfolio content: {0}")]
    Content(String),

    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}
