//! Shared error type across BlockEvid crates.
//!
//! Policy denials are *not* errors (they are `AccessDecision` values); this
//! surface exists for the gateway boundary: bad config, malformed frames,
//! closed channels.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed message.
    BadRequest,
    /// Unsupported config/protocol version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BlockEvidError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum BlockEvidError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl BlockEvidError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            BlockEvidError::BadRequest(_) => ClientCode::BadRequest,
            BlockEvidError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            BlockEvidError::Internal(_) => ClientCode::Internal,
        }
    }
}
