//! Error types for the Snackbar plugin.
//!
//! This module defines the centralized error type [`SnackbarError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The static message shown to the user when the menu cannot be fetched.
///
/// This is the only user-visible failure string; structured detail is carried
/// on the error variants and goes to the trace log.
pub const FETCH_FAILURE_MESSAGE: &str = "Unable to fetch data";

/// The main error type for Snackbar plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin execution,
/// from the menu fetch to theme loading and configuration issues. Variants wrapping
/// underlying errors from external crates use `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use snackbar::domain::SnackbarError;
///
/// fn validate_config() -> Result<(), SnackbarError> {
///     Err(SnackbarError::Config("menu_url must not be empty".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum SnackbarError {
    /// The menu fetch failed.
    ///
    /// Covers transport failures, non-2xx HTTP statuses, and response bodies
    /// that are not a JSON array. The string describes what went wrong; the
    /// user only ever sees [`FETCH_FAILURE_MESSAGE`].
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The response body could not be decoded as JSON.
    ///
    /// Automatically converts from `serde_json::Error` using the `#[from]`
    /// attribute at the decode boundary.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (log directory
    /// creation, theme file reads).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse a built-in or custom theme.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Snackbar operations.
///
/// This is a type alias for `std::result::Result<T, SnackbarError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, SnackbarError>;
