//! Bearer-token supply.
//!
//! The token is resolved once per executed request, so a provider may hand
//! out a different token every time (e.g. after the user signs in again).
//! Returning `None` sends the request without an `Authorization` header.

use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::{Error, ErrorKind, Result};

/// Environment variable holding the personal API token.
pub const API_TOKEN_ENV: &str = "WANIKANI_API_TOKEN";

/// Source of the bearer token attached to outgoing requests.
pub trait TokenProvider: Send + Sync {
    /// Resolve the token for the next request.
    fn token(&self) -> BoxFuture<'_, Option<String>>;
}

/// A fixed token.
///
/// The token is redacted in Debug output.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl StaticToken {
    /// Wrap a fixed token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Read the token from `WANIKANI_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                Error::new(ErrorKind::Config(format!(
                    "{} environment variable is unset",
                    API_TOKEN_ENV
                )))
            })?;
        Ok(Self::new(token))
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> BoxFuture<'_, Option<String>> {
        futures::future::ready(Some(self.token.clone())).boxed()
    }
}

/// Sends every request unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> BoxFuture<'_, Option<String>> {
        futures::future::ready(None).boxed()
    }
}

/// Token provider backed by an async closure.
pub struct FnTokenProvider<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnTokenProvider<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTokenProvider").finish_non_exhaustive()
    }
}

impl<F, Fut> TokenProvider for FnTokenProvider<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Option<String>> + Send + 'static,
{
    fn token(&self) -> BoxFuture<'_, Option<String>> {
        (self.f)().boxed()
    }
}

/// Build a [`TokenProvider`] from an async closure.
///
/// ```rust,ignore
/// let provider = token_fn(|| async { keyring_lookup().await });
/// ```
pub fn token_fn<F, Fut>(f: F) -> FnTokenProvider<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Option<String>> + Send + 'static,
{
    FnTokenProvider { f }
}
