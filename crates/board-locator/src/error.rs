//! Error types for the board locator.

use thiserror::Error;

/// Result type alias for locator operations.
pub type Result<T> = std::result::Result<T, LocatorError>;

/// Errors that can occur while locating boards.
#[derive(Error, Debug)]
pub enum LocatorError {
    /// The platform serial-port enumeration failed.
    #[error(transparent)]
    Enumeration(#[from] serialport::Error),

    /// Vendor table or settings are invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing the located boards failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
