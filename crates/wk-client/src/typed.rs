//! Typed, inert request values.
//!
//! A [`Request<T>`] describes one HTTP call and the decoder for its body.
//! Building one has no side effect; [`Request::execute`] performs the call.
//! All modifiers take `self` and return a new value, so a request can be
//! kept as a template and executed any number of times, concurrently.
//!
//! [`ConditionalRequest<T>`] is the same call carrying `If-Modified-Since`
//! and/or `If-None-Match`. Its result type is `Option<T>`: a 304 answer is a
//! success with no body.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::client::WaniKaniHttpClient;
use crate::date::to_http_date;
use crate::error::Result;
use crate::request::{QueryParam, RequestBuilder};
use crate::response::{classify, ApiResponse, Classification, Failure, HttpResponse, Success};

/// Decodes a successful response body into the declared result type.
pub type Decoder<T> = fn(&[u8]) -> serde_json::Result<T>;

/// The default decoder: plain JSON via serde.
pub fn json_decoder<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    serde_json::from_slice(body)
}

/// A not-yet-executed call whose successful body decodes to `T`.
pub struct Request<T> {
    http: WaniKaniHttpClient,
    builder: RequestBuilder,
    decoder: Decoder<T>,
}

impl<T> Clone for Request<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            builder: self.builder.clone(),
            decoder: self.decoder,
        }
    }
}

impl<T> std::fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("builder", &self.builder)
            .field("result", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> Request<T> {
    /// Create a request decoding its body as JSON.
    pub fn new(http: WaniKaniHttpClient, builder: RequestBuilder) -> Self {
        Self::with_decoder(http, builder, json_decoder::<T>)
    }
}

impl<T> Request<T> {
    /// Create a request with an explicit body decoder.
    pub fn with_decoder(
        http: WaniKaniHttpClient,
        builder: RequestBuilder,
        decoder: Decoder<T>,
    ) -> Self {
        Self {
            http,
            builder,
            decoder,
        }
    }

    /// The underlying request description.
    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// The client this request will execute on.
    pub fn http(&self) -> &WaniKaniHttpClient {
        &self.http
    }

    /// Transform the request description (extra headers, parameters, ...).
    /// Nothing is sent.
    pub fn map_builder(mut self, f: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Self {
        self.builder = f(self.builder);
        self
    }

    /// Set a raw query parameter.
    pub fn query(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map_builder(|builder| builder.query(name, value))
    }

    /// Set a query parameter using its [`QueryParam`] encoding.
    pub fn param<V: QueryParam + ?Sized>(self, name: &str, value: &V) -> Self {
        self.map_builder(|builder| builder.param(name, value))
    }

    /// Add a header.
    pub fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map_builder(|builder| builder.header(name, value))
    }

    /// Make the request conditional without adding a precondition yet.
    pub fn conditional(self) -> ConditionalRequest<T> {
        ConditionalRequest { inner: self }
    }

    /// Only return a body if the resource changed after `timestamp`.
    pub fn if_modified_since(self, timestamp: DateTime<Utc>) -> ConditionalRequest<T> {
        self.conditional().if_modified_since(timestamp)
    }

    /// Only return a body if the resource's ETag differs from `etag`.
    pub fn if_none_match(self, etag: impl Into<String>) -> ConditionalRequest<T> {
        self.conditional().if_none_match(etag)
    }

    /// Perform the call.
    ///
    /// 2xx decodes the body; every other status (304 included) is a
    /// [`Failure`]. Transport faults and undecodable bodies are errors.
    #[instrument(skip(self), fields(method = ?self.builder.method(), url = %self.builder.url()))]
    pub async fn execute(&self) -> Result<ApiResponse<T>> {
        let response = self.http.execute(&self.builder).await?;

        match classify(response.status(), false) {
            Classification::Success => {
                let success = decode_success(response, self.decoder).await?;
                Ok(ApiResponse::Success(success))
            }
            Classification::NotModified | Classification::Failure => {
                Ok(ApiResponse::Failure(Failure::from_response(response).await))
            }
        }
    }
}

/// A request carrying cache preconditions; see the module docs.
pub struct ConditionalRequest<T> {
    inner: Request<T>,
}

impl<T> Clone for ConditionalRequest<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ConditionalRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionalRequest")
            .field("builder", &self.inner.builder)
            .field("result", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> ConditionalRequest<T> {
    /// The underlying request description.
    pub fn builder(&self) -> &RequestBuilder {
        &self.inner.builder
    }

    /// Set `If-Modified-Since`, replacing any earlier value.
    pub fn if_modified_since(mut self, timestamp: DateTime<Utc>) -> Self {
        self.inner = self
            .inner
            .map_builder(|builder| builder.if_modified_since(to_http_date(&timestamp)));
        self
    }

    /// Set `If-None-Match`, replacing any earlier value.
    pub fn if_none_match(mut self, etag: impl Into<String>) -> Self {
        self.inner = self
            .inner
            .map_builder(|builder| builder.if_none_match(etag));
        self
    }

    /// Transform the request description. Nothing is sent.
    pub fn map_builder(mut self, f: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Self {
        self.inner = self.inner.map_builder(f);
        self
    }

    /// Set a raw query parameter.
    pub fn query(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map_builder(|builder| builder.query(name, value))
    }

    /// Drop the preconditions and go back to a plain request.
    pub fn into_regular(self) -> Request<T> {
        self.inner.map_builder(RequestBuilder::without_preconditions)
    }

    /// Perform the call.
    ///
    /// 2xx decodes the body into `Some`, 304 is a success with `None`, and
    /// every other status is a [`Failure`].
    #[instrument(skip(self), fields(method = ?self.inner.builder.method(), url = %self.inner.builder.url()))]
    pub async fn execute(&self) -> Result<ApiResponse<Option<T>>> {
        let response = self.inner.http.execute(&self.inner.builder).await?;

        match classify(response.status(), true) {
            Classification::Success => {
                let success = decode_success(response, self.inner.decoder).await?;
                Ok(ApiResponse::Success(success).map(Some))
            }
            Classification::NotModified => Ok(ApiResponse::Success(Success {
                body: None,
                etag: response.etag().map(str::to_string),
                last_modified: response.last_modified(),
            })),
            Classification::Failure => {
                Ok(ApiResponse::Failure(Failure::from_response(response).await))
            }
        }
    }
}

async fn decode_success<T>(response: HttpResponse, decoder: Decoder<T>) -> Result<Success<T>> {
    let etag = response.etag().map(str::to_string);
    let last_modified = response.last_modified();
    let body = response.bytes().await?;
    let body = decoder(&body)?;
    Ok(Success {
        body,
        etag,
        last_modified,
    })
}
