use std::io;
use thiserror::Error;

/// Custom error type for the cgmon application
#[derive(Error, Debug)]
pub enum CgmonError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Settings store error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Malformed entry: {0}")]
    Entry(String),

    #[error("Notification error: {0}")]
    Notification(String),
}

/// Result type alias for the cgmon application
pub type Result<T> = std::result::Result<T, CgmonError>;

impl CgmonError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CgmonError::Config(msg.into())
    }

    /// Create a fetch error
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        CgmonError::Fetch(msg.into())
    }

    /// Create a malformed entry error
    pub fn entry<S: Into<String>>(msg: S) -> Self {
        CgmonError::Entry(msg.into())
    }

    /// Create a notification error
    pub fn notification<S: Into<String>>(msg: S) -> Self {
        CgmonError::Notification(msg.into())
    }
}
