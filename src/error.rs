/// Error handling module for webhook-source.
///
/// This module defines the error types used throughout the library.
/// Note that the validation entry points themselves never return these
/// errors: all detectable configuration problems are folded into the
/// `reason` field of a [`ValidationResult`](crate::ValidationResult).
/// The errors here cover the surrounding plumbing, such as reading a
/// configuration file from disk or running a parser directly.
///
/// # Example
///
/// ```
/// use webhook_source::error::{Error, Result};
///
/// fn handle_error(result: Result<()>) {
///     match result {
///         Ok(_) => println!("Operation succeeded"),
///         Err(Error::ConfigParse(msg)) => println!("Parse error: {}", msg),
///         Err(e) => println!("Other error: {}", e),
///     }
/// }
/// ```
use thiserror::Error;

/// Errors that can occur in the webhook-source library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to parse configuration from a file or string.
    ///
    /// This error occurs when:
    /// - The configuration payload is malformed
    /// - The payload does not conform to the webhook descriptor shape
    /// - A configuration file cannot be read
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Configuration parsed successfully but failed a validation check.
    ///
    /// This error occurs when:
    /// - The HTTP method is outside the allowed set
    /// - The endpoint is empty or does not start with '/'
    /// - The port is empty or not a decimal integer
    #[error("Invalid configuration: {0}")]
    ConfigValidation(#[from] crate::config::ValidationError),

    /// Any other error not covered by the above categories.
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type for webhook-source operations.
///
/// This is a convenience type alias for `std::result::Result` with the `Error` type
/// from this module.
pub type Result<T> = std::result::Result<T, Error>;
