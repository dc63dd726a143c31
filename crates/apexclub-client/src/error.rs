//! # Client Error Type
//!
//! Error taxonomy for backend communication.
//!
//! ## The Failure Classes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  submit ──► rule violation? ────────────────► Validation               │
//! │                  │                            (blocked BEFORE network) │
//! │                  ▼                                                      │
//! │  request ──► transport failure? ────────────► Transport (generic text) │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │            401 response? ───────────────────► Unauthorized             │
//! │                  │                            (+ TokenProvider hook)   │
//! │                  ▼                                                      │
//! │            other non-2xx? ──────────────────► Api { status, message }  │
//! │                  │                            message shown VERBATIM   │
//! │                  ▼                                                      │
//! │            body won't parse? ───────────────► Decode                   │
//! │                                                                         │
//! │  Nothing retries automatically. No error is fatal to the caller.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use apexclub_core::CoreError;

/// Errors from talking to the club backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The submission was blocked client-side before any network call.
    ///
    /// The session is untouched; correct the input and resubmit.
    #[error("{0}")]
    Validation(#[from] CoreError),

    /// The request never completed (DNS, connect, timeout, TLS).
    ///
    /// The underlying error is logged; operators see a generic message
    /// because transport detail is noise at the front desk.
    #[error("could not reach the club backend")]
    Transport(#[from] reqwest::Error),

    /// The backend rejected the request with a non-2xx status.
    ///
    /// `message` is the backend's own `message` field, surfaced verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The backend answered 401; the session token is missing or stale.
    #[error("session expired - sign in again")]
    Unauthorized,

    /// A 2xx response body did not match the expected shape.
    #[error("unexpected response from the club backend")]
    Decode(#[source] serde_json::Error),
}

/// Convenience type alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_is_verbatim() {
        let err = ClientError::Api {
            status: 409,
            message: "Member already has an active Gold subscription".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Member already has an active Gold subscription"
        );
    }

    #[test]
    fn test_unauthorized_message() {
        assert_eq!(
            ClientError::Unauthorized.to_string(),
            "session expired - sign in again"
        );
    }
}
