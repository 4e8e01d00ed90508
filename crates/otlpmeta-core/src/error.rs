//! Shared error type across otlpmeta crates.
//!
//! Metadata resolution itself is infallible; these errors only surface from
//! validation and the outer loading/serving layers.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, OtlpMetaError>;

/// Unified error type used by core and agent.
#[derive(Debug, Error)]
pub enum OtlpMetaError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl OtlpMetaError {
    /// Stable short code, used in logs and process exit messages.
    pub fn code(&self) -> &'static str {
        match self {
            OtlpMetaError::BadConfig(_) => "BAD_CONFIG",
            OtlpMetaError::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            OtlpMetaError::Io(_) => "IO",
            OtlpMetaError::Internal(_) => "INTERNAL",
        }
    }
}

impl From<std::io::Error> for OtlpMetaError {
    fn from(e: std::io::Error) -> Self {
        OtlpMetaError::Io(e.to_string())
    }
}
