// src/error.rs

//! Error types for the larder crate
//!
//! A single crate-wide error enum with a `Result` alias. Call sites map
//! collaborator errors into string-payload variants with enough context
//! to be actionable from the CLI.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by larder operations
#[derive(Error, Debug)]
pub enum Error {
    /// Initialization failed (database creation, client construction)
    #[error("Initialization error: {0}")]
    InitError(String),

    /// SQLite operation failed
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// Remote fetch failed (connection, HTTP status, or JSON decode)
    #[error("Download error: {0}")]
    DownloadError(String),

    /// Malformed data (URLs, timestamps, cached JSON columns)
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}
