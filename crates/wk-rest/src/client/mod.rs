//! WaniKani REST API client.
//!
//! This client wraps `WaniKaniHttpClient` from `wanikani-client` and
//! provides one method per endpoint. Every method returns an unexecuted
//! [`Request`]; nothing is sent until the caller calls `execute`.

use serde::de::DeserializeOwned;
use wanikani_client::{
    ClientConfig, Request, RequestBuilder, Result, StaticToken, TokenProvider, WaniKaniHttpClient,
};

mod assignments;
mod level_progressions;
mod pagination;
mod resets;
mod review_statistics;
mod reviews;
mod spaced_repetition_systems;
mod study_materials;
mod subjects;
mod summary;
mod user;
mod voice_actors;

pub use pagination::CollectionRequestExt;

/// WaniKani REST API client.
///
/// Provides typed requests for every resource:
/// - Subjects, assignments and level progressions
/// - Reviews and review statistics
/// - Study materials
/// - The summary and user reports
/// - Cursor pagination over collections
///
/// # Example
///
/// ```rust,ignore
/// use wanikani_rest::{SubjectFilters, SubjectType, WaniKaniClient};
///
/// let client = WaniKaniClient::new("api-token")?;
///
/// let kanji = client
///     .subjects(&SubjectFilters {
///         types: vec![SubjectType::Kanji],
///         levels: vec![1],
///         ..Default::default()
///     })
///     .execute()
///     .await?
///     .into_result()?;
///
/// if let Some(next) = client.next_page(&kanji) {
///     let more = next.execute().await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WaniKaniClient {
    http: WaniKaniHttpClient,
}

impl WaniKaniClient {
    /// Create a client with the default configuration and a fixed token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), StaticToken::new(token))
    }

    /// Create a client with custom HTTP configuration and token supply.
    pub fn with_config(
        config: ClientConfig,
        token_provider: impl TokenProvider + 'static,
    ) -> Result<Self> {
        let http = WaniKaniHttpClient::new(config, token_provider)?;
        Ok(Self { http })
    }

    /// Create a client from `WANIKANI_API_TOKEN`, `WANIKANI_BASE_URL` and
    /// `WANIKANI_REVISION`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?, StaticToken::from_env()?)
    }

    /// Create a client from an existing transport.
    pub fn from_http(http: WaniKaniHttpClient) -> Self {
        Self { http }
    }

    /// Get the underlying transport.
    pub fn inner(&self) -> &WaniKaniHttpClient {
        &self.http
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url().as_str()
    }

    /// Get the API revision sent with every request.
    pub fn revision(&self) -> &str {
        &self.http.config().revision
    }

    pub(crate) fn request<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Request<T> {
        Request::new(self.http.clone(), builder)
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, path: impl Into<String>) -> Request<T> {
        self.request(self.http.get(path))
    }
}
