//! # wanikani-client
//!
//! Core HTTP client infrastructure for the WaniKani API.
//!
//! This crate provides the transport layer that every endpoint is built on:
//! - Revision header and bearer token on every call
//! - Compression support (gzip, deflate)
//! - ETag / If-Modified-Since conditional requests
//! - Connection pooling
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (wanikani-rest: subjects, assignments, reviews, ...)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Request<T> / ConditionalRequest<T>             │
//! │  - Inert description of one call plus its body decoder      │
//! │  - Classifies the status into Success / Failure             │
//! │  - 304 is a bodiless success only when made conditional     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   WaniKaniHttpClient                        │
//! │  - Base URL, revision header, token provider                │
//! │  - One HTTP call per execute, no retry                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use wanikani_client::{ClientConfig, Request, StaticToken, WaniKaniHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wanikani_client::Error> {
//!     let http = WaniKaniHttpClient::new(ClientConfig::from_env()?, StaticToken::from_env()?)?;
//!
//!     let user: Request<serde_json::Value> = Request::new(http.clone(), http.get("user"));
//!     let first = user.execute().await?;
//!
//!     // Ask again, only wanting a body if something changed
//!     if let Some(etag) = first.success().and_then(|s| s.etag.clone()) {
//!         let again = user.if_none_match(etag).execute().await?;
//!         assert!(again.is_success());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
pub mod date;
mod error;
mod request;
mod response;
mod typed;

pub use auth::{token_fn, FnTokenProvider, NoToken, StaticToken, TokenProvider, API_TOKEN_ENV};
pub use client::{WaniKaniHttpClient, REVISION_HEADER};
pub use config::{ClientConfig, ClientConfigBuilder, BASE_URL_ENV, REVISION_ENV};
pub use error::{Error, ErrorKind, Result};
pub use request::{Present, QueryParam, RequestBuilder, RequestMethod};
pub use response::{classify, ApiResponse, Classification, Failure, HttpResponse, Success};
pub use typed::{json_decoder, ConditionalRequest, Decoder, Request};

/// Default base URL of the v2 API.
pub const DEFAULT_BASE_URL: &str = "https://api.wanikani.com/v2/";

/// Default value of the revision header.
pub const DEFAULT_REVISION: &str = "20170710";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("wanikani-api/", env!("CARGO_PKG_VERSION"));
