//! HTTP response handling: the raw response wrapper, the status classifier,
//! and the caller-facing [`ApiResponse`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::date::parse_http_date;
use crate::error::{Error, ErrorKind, Result};

/// Wrapper around the transport's HTTP response.
#[derive(Debug)]
pub struct HttpResponse {
    inner: reqwest::Response,
}

impl HttpResponse {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Returns true if this is a 304 Not Modified response.
    pub fn is_not_modified(&self) -> bool {
        self.status() == 304
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the ETag header value.
    pub fn etag(&self) -> Option<&str> {
        self.header("etag")
    }

    /// Get the Last-Modified header as a timestamp.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.header("last-modified").and_then(parse_http_date)
    }

    /// Get the Content-Length, if the server sent one.
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }
}

/// How a response status is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// 2xx: decode the body as the declared type.
    Success,
    /// 304 on a conditional request: success with no body.
    NotModified,
    /// Anything else.
    Failure,
}

/// Classify a status code.
///
/// 304 only counts as "not modified" when the request was explicitly made
/// conditional; a plain request receiving 304 is a failure like any other
/// non-2xx status.
pub fn classify(status: u16, conditional: bool) -> Classification {
    match status {
        200..=299 => Classification::Success,
        304 if conditional => Classification::NotModified,
        _ => Classification::Failure,
    }
}

/// Outcome of executing a request.
///
/// Transport faults and undecodable success bodies are not represented
/// here; they surface as the `Err` side of the execute call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(Success<T>),
    Failure(Failure),
}

/// A successful response with its decoded body and cache validators.
#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    pub body: T,
    /// `ETag` of the response, usable with `if_none_match`.
    pub etag: Option<String>,
    /// `Last-Modified` of the response, usable with `if_modified_since`.
    pub last_modified: Option<DateTime<Utc>>,
}

/// A non-success status, with the service's error message if it sent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub code: u16,
    pub message: Option<String>,
}

/// Error body returned by the service: `{"error": "...", "code": 404}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl Failure {
    /// Build a failure from a response, decoding the error message on a
    /// best-effort basis. An unreadable or malformed body yields no message.
    pub(crate) async fn from_response(response: HttpResponse) -> Self {
        let code = response.status();
        let message = match response.bytes().await {
            Ok(body) => parse_error_message(&body),
            Err(_) => None,
        };
        Self { code, message }
    }
}

fn parse_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
}

impl<T> ApiResponse<T> {
    /// Returns true for the success outcome.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// The success payload, if any.
    pub fn success(&self) -> Option<&Success<T>> {
        match self {
            ApiResponse::Success(success) => Some(success),
            ApiResponse::Failure(_) => None,
        }
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(failure) => Some(failure),
        }
    }

    /// Transform the success body, keeping the validators.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(success) => ApiResponse::Success(Success {
                body: f(success.body),
                etag: success.etag,
                last_modified: success.last_modified,
            }),
            ApiResponse::Failure(failure) => ApiResponse::Failure(failure),
        }
    }

    /// Return the body, turning a failure into [`ErrorKind::Service`].
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Success(success) => Ok(success.body),
            ApiResponse::Failure(failure) => Err(Error::new(ErrorKind::Service {
                status: failure.code,
                message: failure.message,
            })),
        }
    }
}
