//! Error types for the EasyPay extractor
//!
//! This module provides the error type hierarchy using `thiserror`.
//!
//! Per-field and per-grid read failures are deliberately absent from the
//! top level: the readers contain them at their own boundary (empty string
//! / empty sequence). Only gate, navigation, browser, and snapshot-write
//! failures propagate to the run.

use thiserror::Error;

/// The main error type for extractor operations
#[derive(Error, Debug)]
pub enum Error {
    /// Browser lifecycle errors
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Session gate errors
    #[error("Session gate error: {0}")]
    Gate(#[from] GateError),

    /// Page read errors (contained by the readers, never cross the
    /// orchestrator boundary)
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Snapshot persistence errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// ChromiumOxide errors
    #[error("CDP error: {0}")]
    Cdp(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Browser lifecycle and control errors
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Browser connection lost
    #[error("Browser connection lost")]
    ConnectionLost,

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),

    /// Timeout waiting for browser
    #[error("Browser operation timed out after {0}ms")]
    Timeout(u64),
}

/// Navigation errors
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Navigation timeout
    #[error("Navigation timed out after {0}ms")]
    Timeout(u64),

    /// Page load failed
    #[error("Page load failed: {0}")]
    LoadFailed(String),
}

/// Session gate errors
///
/// The gate is the only pre-extraction abort point: login and navigation
/// happen out-of-band, and field reads against an unconfirmed page would
/// resolve unpredictably.
#[derive(Error, Debug)]
pub enum GateError {
    /// The readiness marker never appeared within the allotted wait
    #[error("Session marker {marker:?} did not appear within {waited_ms}ms")]
    SessionTimeout {
        /// Marker locator that was awaited
        marker: String,
        /// Total wait before giving up, in milliseconds
        waited_ms: u64,
    },
}

/// Page read errors
///
/// Raised inside the CDP page surface; the field and grid readers map
/// every variant to their empty fallback.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Element not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Invalid selector
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// JavaScript execution failed
    #[error("JavaScript execution failed: {0}")]
    JsExecutionFailed(String),

    /// Evaluate returned something other than the expected shape
    #[error("Unexpected evaluate result: {0}")]
    UnexpectedResult(String),
}

/// Snapshot persistence errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Output directory could not be created
    #[error("Failed to create output directory {path}: {source}")]
    CreateDirFailed {
        /// Directory that could not be created
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Snapshot file could not be written
    #[error("Failed to write snapshot {path}: {source}")]
    WriteFailed {
        /// File that could not be written
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type alias for extractor operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Create a CDP error from a string
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }
}

/// Convert chromiumoxide errors
impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}
