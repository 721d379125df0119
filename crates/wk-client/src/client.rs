//! HTTP transport bound to the WaniKani base URL, revision header and token provider.

use std::sync::Arc;

use tracing::{debug, info, instrument};
use url::Url;

use crate::auth::{StaticToken, TokenProvider};
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::HttpResponse;

/// Header carrying the API revision.
pub const REVISION_HEADER: &str = "Wanikani-Revision";

/// HTTP client for the WaniKani API.
///
/// Cloning is cheap; clones share the connection pool and token provider.
/// Every call to [`execute`](Self::execute) performs exactly one HTTP
/// request. There is no retry and no response caching.
#[derive(Clone)]
pub struct WaniKaniHttpClient {
    inner: reqwest::Client,
    base_url: Url,
    config: ClientConfig,
    token_provider: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for WaniKaniHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaniKaniHttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("revision", &self.config.revision)
            .finish_non_exhaustive()
    }
}

impl WaniKaniHttpClient {
    /// Create a client from a configuration and a token provider.
    pub fn new(config: ClientConfig, token_provider: impl TokenProvider + 'static) -> Result<Self> {
        Self::with_shared_provider(config, Arc::new(token_provider))
    }

    /// Create a client whose token provider is shared with other owners.
    pub fn with_shared_provider(
        config: ClientConfig,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("invalid base URL {}", config.base_url)),
                e,
            )
        })?;

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            base_url,
            config,
            token_provider,
        })
    }

    /// Create a client with default configuration and a fixed token.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::default(), StaticToken::new(token))
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the parsed base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request target. Absolute URLs are used as-is; anything
    /// else is joined onto the base URL.
    pub fn resolve_url(&self, target: &str) -> Result<Url> {
        match Url::parse(target) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .base_url
                .join(target.trim_start_matches('/'))
                .map_err(Into::into),
            Err(e) => Err(e.into()),
        }
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Create a PUT request builder.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Put, url)
    }

    /// Perform one HTTP call for the given request description.
    ///
    /// Any status code is returned as a response; only transport faults
    /// (connect, timeout, ...) are errors.
    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    pub async fn execute(&self, request: &RequestBuilder) -> Result<HttpResponse> {
        let url = self.resolve_url(&request.url)?;
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), url.clone())
            .header(REVISION_HEADER, self.config.revision.as_str());

        if let Some(token) = self.token_provider.token().await {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if let Some(ref etag) = request.if_none_match {
            req = req.header("If-None-Match", etag.as_str());
        }
        if let Some(ref ts) = request.if_modified_since {
            req = req.header("If-Modified-Since", ts.as_str());
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        if self.config.enable_tracing {
            debug!(method = ?request.method, url = %url, "Sending request");
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if response.status().is_success() || status == 304 {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Ok(HttpResponse::new(response))
    }
}
