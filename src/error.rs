//! Error types for the warranty engine.

use std::fmt;

/// Result type for warranty operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the warranty engine.
///
/// Single-unit resolution never surfaces these to its caller: every variant is
/// absorbed by a fallback tier. Batch projection surfaces fatal variants as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Inventory has no unit for the requested serial.
    ///
    /// Non-fatal: resolution advances to the copy tier.
    LookupNotFound(String),

    /// Warranty text matched none of the known phrases.
    ///
    /// Non-fatal: the condition-based default applies.
    TermUnrecognized(String),

    /// An external collaborator (inventory or sales store) failed.
    ///
    /// Common causes:
    /// - Hosted store unreachable
    /// - Query rejected by the store
    /// - Malformed rows returned
    ///
    /// **Recovery:** The caller decides whether to retry. Batch projection
    /// aborts without partial results.
    CollaboratorUnavailable(String),

    /// Query filters are inconsistent (e.g. `date_from` after `date_to`).
    ///
    /// Raised before any collaborator is queried.
    InvalidFilter(String),

    /// A collaborator call exceeded the configured timeout.
    Timeout(String),

    /// Invalid engine configuration.
    ConfigError(String),

    /// Generic error with custom message.
    Other(String),
}

impl Error {
    /// Whether this error ends the operation it occurred in.
    ///
    /// `LookupNotFound` and `TermUnrecognized` only move resolution to the
    /// next tier.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::LookupNotFound(_) | Error::TermUnrecognized(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LookupNotFound(serial) => write!(f, "No inventory unit for serial {}", serial),
            Error::TermUnrecognized(text) => write!(f, "Unrecognized warranty term: {:?}", text),
            Error::CollaboratorUnavailable(msg) => write!(f, "Collaborator unavailable: {}", msg),
            Error::InvalidFilter(msg) => write!(f, "Invalid filter: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config error: {}", msg),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Conversions from other error types
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::CollaboratorUnavailable(format!("malformed store payload: {}", e))
    }
}

impl From<tokio::time::error::Elapsed> for Error {
    fn from(e: tokio::time::error::Elapsed) -> Self {
        Error::Timeout(e.to_string())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Other(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Other(e.to_string())
    }
}
