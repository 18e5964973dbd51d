//! Core error to gRPC status mapping.

use tonic::Status;

use rococo_core::error::RococoError;

/// Map a core error onto its gRPC status.
///
/// The three error classes stay programmatically distinguishable for
/// callers. Internal causes are logged here and replaced with a generic
/// message, so storage detail never crosses the wire.
pub fn to_status(err: RococoError) -> Status {
    match err {
        RococoError::NotFound(msg) => Status::not_found(msg),
        RococoError::InvalidArgument(msg) => Status::invalid_argument(msg),
        RococoError::Internal(cause) => {
            tracing::error!(error = %cause, "internal error");
            Status::internal("internal error")
        }
    }
}
