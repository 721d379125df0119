//! Untyped HTTP request descriptions and query-parameter encoding.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::Result;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
        }
    }
}

/// Encoding of a value as a single query-parameter value.
///
/// `None` means the parameter is left off the request entirely. Sequences
/// are joined with commas, and an empty sequence is omitted: an empty filter
/// means "not filtered", never "filtered to nothing".
pub trait QueryParam {
    /// The wire value, or `None` to omit the parameter.
    fn to_query(&self) -> Option<String>;
}

impl<T: QueryParam + ?Sized> QueryParam for &T {
    fn to_query(&self) -> Option<String> {
        (**self).to_query()
    }
}

impl<T: QueryParam> QueryParam for Option<T> {
    fn to_query(&self) -> Option<String> {
        self.as_ref().and_then(QueryParam::to_query)
    }
}

impl<T: QueryParam> QueryParam for [T] {
    fn to_query(&self) -> Option<String> {
        let joined = self
            .iter()
            .filter_map(QueryParam::to_query)
            .collect::<Vec<_>>()
            .join(",");
        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

impl<T: QueryParam> QueryParam for Vec<T> {
    fn to_query(&self) -> Option<String> {
        self.as_slice().to_query()
    }
}

impl QueryParam for str {
    fn to_query(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryParam for String {
    fn to_query(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl QueryParam for bool {
    fn to_query(&self) -> Option<String> {
        Some(self.to_string())
    }
}

macro_rules! integer_query_param {
    ($($ty:ty),*) => {
        $(
            impl QueryParam for $ty {
                fn to_query(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

integer_query_param!(u8, u16, u32, u64, usize, i32, i64);

impl QueryParam for DateTime<Utc> {
    fn to_query(&self) -> Option<String> {
        Some(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// Marker for filters that take effect by being present, without a value
/// (e.g. `in_review`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

impl QueryParam for Present {
    fn to_query(&self) -> Option<String> {
        Some(String::new())
    }
}

/// Builder for one HTTP call against the service.
///
/// `url` is either a path relative to the configured base URL or an
/// absolute URL (as handed out by pagination links). Nothing is sent until
/// the builder is passed to [`WaniKaniHttpClient::execute`](crate::WaniKaniHttpClient::execute).
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<serde_json::Value>,
    /// ETag for If-None-Match header (conditional GET).
    pub(crate) if_none_match: Option<String>,
    /// RFC 1123 timestamp for If-Modified-Since header.
    pub(crate) if_modified_since: Option<String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
            if_none_match: None,
            if_modified_since: None,
        }
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The relative path or absolute URL this request targets.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Query parameters in insertion order.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// Look up a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Look up a header by name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// The JSON body, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Add a header, replacing any previous value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set a query parameter, replacing any previous value with the same name.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.query_params.retain(|(key, _)| *key != name);
        self.query_params.push((name, value.into()));
        self
    }

    /// Set a query parameter using its [`QueryParam`] encoding.
    ///
    /// Values that encode to nothing (absent options, empty sequences) leave
    /// the request untouched.
    pub fn param<V: QueryParam + ?Sized>(self, name: &str, value: &V) -> Self {
        match value.to_query() {
            Some(encoded) => self.query(name, encoded),
            None => self,
        }
    }

    /// Set JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        self.body = Some(value);
        Ok(self)
    }

    /// Set raw JSON body.
    pub fn json_value(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set If-None-Match header for conditional GET.
    /// The service answers 304 Not Modified if the ETag matches.
    pub fn if_none_match(mut self, etag: impl Into<String>) -> Self {
        self.if_none_match = Some(etag.into());
        self
    }

    /// Set If-Modified-Since header (RFC 1123 date).
    /// The service answers 304 Not Modified if nothing changed since then.
    pub fn if_modified_since(mut self, timestamp: impl Into<String>) -> Self {
        self.if_modified_since = Some(timestamp.into());
        self
    }

    /// Remove both conditional preconditions.
    pub fn without_preconditions(mut self) -> Self {
        self.if_none_match = None;
        self.if_modified_since = None;
        self
    }
}
