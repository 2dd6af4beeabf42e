//! Error types for `PinMap`
//!
//! Pin editing and playback never fail: an action that is not allowed in the
//! current mode is ignored. The errors here cover the ambient parts of the
//! application (configuration files, logging setup, the GUI platform).
//! Boxed sources are kept so `anyhow` reports show the full chain.

use thiserror::Error;

/// Plain message usable as a boxed error source
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Box a message for one of the `PinMapError` variants
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `PinMap`
#[derive(Debug, Error)]
pub enum PinMapError {
    /// The configuration file could not be read or written
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    LoggingError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The windowing platform or UI toolkit failed
    #[error("GUI error: {0}")]
    GuiError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `PinMap` operations
pub type Result<T> = std::result::Result<T, PinMapError>;

/// Convert an error to a user-friendly message
///
/// Returns text suitable for an error dialog, including a hint on how to
/// resolve the problem.
pub fn get_user_friendly_error(error: &PinMapError) -> String {
    match error {
        PinMapError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to the PinMap configuration directory."
            .to_string(),
        PinMapError::LoggingError(_) => "Failed to set up the log file.\n\n\
             Check that the PinMap configuration directory is writable."
            .to_string(),
        PinMapError::GuiError(e) => {
            format!(
                "The window could not be created:\n\n{e}\n\n\
                 Please make sure a graphical session is available."
            )
        }
        PinMapError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        PinMapError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
