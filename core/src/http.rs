//! Plain-data HTTP request and response types.
//!
//! The resource clients in this crate never touch a socket: they produce
//! `HttpRequest` values and consume `HttpResponse` values, and a
//! [`Transport`](crate::transport::Transport) implementation carries out the
//! round-trip in between. Owned fields keep the values free of lifetimes so
//! they can be queued, logged, or replayed by tests.

/// HTTP verb for a request.
///
/// The people service uses `Put` both for updates and, on the person
/// resource, for deletion (`PUT /person/{id}` with no body).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A single HTTP request, fully resolved: `url` already contains the base
/// URL and any query string.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// The raw result of executing an [`HttpRequest`].
///
/// Status interpretation is left to the resource clients; transports must
/// hand back non-2xx responses as data, not as errors, so the body can be
/// surfaced as a server-supplied message.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True for any status in the 2xx window.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
