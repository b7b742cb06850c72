/// Confsnap Error Module
///
/// This module defines the error types for the confsnap crate and a
/// crate-wide `Result` alias so callers deal with one error enum instead of
/// mixed error types.
use thiserror::Error;

/// Error type covering every failure this layer can surface.
///
/// The recoverable/fatal split matters:
/// - `FieldAccess` is recoverable; the offending field is skipped and
///   snapshot extraction continues.
/// - `UnsupportedEngine` is fatal for the single descriptor build that
///   produced it.
/// - `Connection` is caught at the connectivity-check boundary and surfaced
///   only as a boolean plus a logged message.
/// - `Query` is propagated to `fetch_all` callers with the cause attached.
#[derive(Error, Debug)]
pub enum ConfSnapError {
    /// A configuration field could not be read during snapshot extraction
    #[error("Field access error: {0}")]
    FieldAccess(String),

    /// The requested database engine is not in the supported set
    #[error("Unsupported database engine: {0}")]
    UnsupportedEngine(String),

    /// A connection could not be established
    #[error("Connection error: {0}")]
    Connection(String),

    /// A query failed during open, execute, or result processing
    #[error("Query error: {0}")]
    Query(String),

    /// Errors from the embedded SQLite driver
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Settings loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization errors for composite field values
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result to use ConfSnapError as the error type.
pub type Result<T> = std::result::Result<T, ConfSnapError>;
