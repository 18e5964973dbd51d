use thiserror::Error;

/// The three error classes surfaced by the service layer.
///
/// `NotFound` and `InvalidArgument` carry the full caller-facing message,
/// including the offending key or id. `Internal` wraps the storage-level
/// cause; it is logged at the boundary and never shown to callers verbatim.
#[derive(Debug, Error)]
pub enum RococoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

impl RococoError {
    /// The message a caller is allowed to see. For `Internal` this is a
    /// fixed string; the cause stays on the server side.
    pub fn public_message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::InvalidArgument(msg) => msg,
            Self::Internal(_) => "internal error",
        }
    }
}
