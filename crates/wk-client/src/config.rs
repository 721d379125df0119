//! Client configuration.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "WANIKANI_BASE_URL";

/// Environment variable overriding the API revision.
pub const REVISION_ENV: &str = "WANIKANI_REVISION";

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every relative request path is resolved against.
    pub base_url: String,
    /// Value of the `Wanikani-Revision` header sent with every request.
    pub revision: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept gzip/deflate compressed responses.
    pub accept_compressed: bool,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            revision: crate::DEFAULT_REVISION.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Build a configuration from the defaults, overridden by
    /// `WANIKANI_BASE_URL` and `WANIKANI_REVISION` when they are set.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            url::Url::parse(&base_url).map_err(|e| {
                Error::with_source(
                    ErrorKind::Config(format!("{} is not a valid URL", BASE_URL_ENV)),
                    e,
                )
            })?;
            builder = builder.with_base_url(base_url);
        }

        if let Ok(revision) = std::env::var(REVISION_ENV) {
            builder = builder.with_revision(revision);
        }

        Ok(builder.build())
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL. A trailing slash is appended if missing so that
    /// relative paths resolve beneath it.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.config.base_url = base_url;
        self
    }

    /// Set the API revision header value.
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.config.revision = revision.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Accept or refuse compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
