//! Error type shared by every API operation.

use thiserror::Error;

/// Failure of a single API operation.
///
/// Validation never produces an `ApiError`; required-field checks live in
/// the form models and block submission before a request is built.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be executed at all (connection refused, DNS,
    /// I/O mid-response). There is no server message to show.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered outside the 2xx window. `body` is kept verbatim
    /// so callers can show the server-supplied message.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("request serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("response deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// The server-supplied message carried by this error, if any.
    ///
    /// Only an HTTP error with a non-blank body qualifies; everything else
    /// falls back to the caller's own wording.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { body, .. } if !body.trim().is_empty() => Some(body),
            _ => None,
        }
    }
}

/// Log a failed operation at error level and pass the result through.
///
/// Services funnel every outcome through this so failures are always
/// recorded once, at the resource layer, before the caller decides what to
/// show the user.
pub(crate) fn logged<V>(context: &str, result: Result<V, ApiError>) -> Result<V, ApiError> {
    if let Err(err) = &result {
        log::error!("error on {context}: {err}");
    }
    result
}
