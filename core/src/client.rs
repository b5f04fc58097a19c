//! Shared API entry point: base URL resolution and request construction.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Environment variable that overrides the API base URL.
pub const BASE_URL_ENV: &str = "PEOPLE_API_BASE_URL";

/// Base URL used when [`BASE_URL_ENV`] is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// The one configured entry point to the people service.
///
/// Holds the base URL and stamps the JSON content-type on every bodied
/// request. Both resource clients route through a clone of the same `Api`,
/// so the base URL is decided in exactly one place. There is no retry,
/// timeout, or interceptor logic here.
#[derive(Debug, Clone)]
pub struct Api {
    base_url: String,
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from [`BASE_URL_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`, which must start with `/`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url(path),
            headers: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn post_json<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json_body(HttpMethod::Post, path, payload)
    }

    pub(crate) fn put_json<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json_body(HttpMethod::Put, path, payload)
    }

    /// Body-less PUT; the person resource deletes through this.
    pub(crate) fn put_empty(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            url: self.url(path),
            headers: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn delete(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.url(path),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json_body<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: self.url(path),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Reject any response outside the 2xx window, keeping the raw status and
/// body for the caller's error messaging.
pub(crate) fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Check the status window, then deserialize the body.
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(
    response: HttpResponse,
) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Check the status window for operations whose success has no body.
pub(crate) fn parse_no_content(response: HttpResponse) -> Result<(), ApiError> {
    check_status(&response)
}
