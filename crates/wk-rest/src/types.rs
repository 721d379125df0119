//! Common scalar types shared by every resource.

use std::fmt;

use serde::{Deserialize, Serialize};
use wanikani_client::QueryParam;

/// An ISO-8601 instant as sent by the service.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Unique identifier of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Id(pub u64);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id(value)
    }
}

impl QueryParam for Id {
    fn to_query(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}
