//! Shared error type across sipstat crates.

use thiserror::Error;

/// Stable error codes (used in logs and by callers matching on failures).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A subsystem catalog is internally inconsistent.
    InvalidCatalog,
    /// Two subsystems claimed the same dispatch key.
    DuplicateKey,
    /// Configuration rejected by validation.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// The statistics collaborator failed to deliver a snapshot.
    Source,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and label values.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidCatalog => "INVALID_CATALOG",
            ErrorCode::DuplicateKey => "DUPLICATE_KEY",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Source => "SOURCE",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SipStatError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum SipStatError {
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error(
        "duplicate registry key {key:?}: already bound to subsystem {existing:?}, \
         refused for {incoming:?}"
    )]
    DuplicateKey {
        key: String,
        existing: String,
        incoming: String,
    },
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("statistics source: {0}")]
    Source(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SipStatError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SipStatError::InvalidCatalog(_) => ErrorCode::InvalidCatalog,
            SipStatError::DuplicateKey { .. } => ErrorCode::DuplicateKey,
            SipStatError::BadConfig(_) => ErrorCode::BadConfig,
            SipStatError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            SipStatError::Source(_) => ErrorCode::Source,
            SipStatError::Internal(_) => ErrorCode::Internal,
        }
    }
}
