//! Error types for filedeck.
//!
//! This module defines the centralized error type [`FiledeckError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for filedeck operations.
///
/// Every failure in this crate is local to one user interaction: a failed
/// search, a rejected mutation, an unreadable data file. None of them are fatal
/// to the event loop.
///
/// # Examples
///
/// ```
/// use filedeck::FiledeckError;
///
/// fn require_session(signed_in: bool) -> Result<(), FiledeckError> {
///     if signed_in {
///         Ok(())
///     } else {
///         Err(FiledeckError::Backend("no active session".to_string()))
///     }
/// }
///
/// assert!(require_session(false).is_err());
/// ```
#[derive(Debug, Error)]
pub enum FiledeckError {
    /// A remote operation was rejected or could not be completed.
    ///
    /// The string carries the backend's description of the failure.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Reading or writing the local data file failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A navigable path could not be parsed.
    #[error("Invalid route: {0}")]
    Route(String),

    /// The event loop or a spawned task failed.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// A specialized `Result` type for filedeck operations.
pub type Result<T> = std::result::Result<T, FiledeckError>;
