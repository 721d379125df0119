//! Cursor pagination.
//!
//! Every collection page links to its neighbours with absolute URLs that
//! already carry the original filters. Following a link is a plain GET of
//! that URL; no parameter is added.

use serde::de::DeserializeOwned;
use tracing::trace;
use wanikani_client::{ConditionalRequest, Request};

use crate::envelope::ResourceSet;
use crate::types::Timestamp;

impl super::WaniKaniClient {
    /// The request for the page after `page`, or `None` on the last page.
    pub fn next_page<T: DeserializeOwned>(
        &self,
        page: &ResourceSet<T>,
    ) -> Option<Request<ResourceSet<T>>> {
        page.pages.next_url.as_deref().map(|url| self.page_at(url))
    }

    /// The request for the page before `page`, or `None` on the first page.
    pub fn previous_page<T: DeserializeOwned>(
        &self,
        page: &ResourceSet<T>,
    ) -> Option<Request<ResourceSet<T>>> {
        page.pages.previous_url.as_deref().map(|url| self.page_at(url))
    }

    /// A request for the collection page at `url`, as found in [`crate::Pages`].
    pub fn page_at<T: DeserializeOwned>(&self, url: &str) -> Request<ResourceSet<T>> {
        trace!(url, "Following collection page");
        self.get(url)
    }
}

/// Helpers available on every collection request.
pub trait CollectionRequestExt: Sized {
    /// Only list resources updated after `timestamp`.
    fn updated_after(self, timestamp: Timestamp) -> Self;
}

impl<T> CollectionRequestExt for Request<ResourceSet<T>> {
    fn updated_after(self, timestamp: Timestamp) -> Self {
        self.param("updated_after", &timestamp)
    }
}

impl<T> CollectionRequestExt for ConditionalRequest<ResourceSet<T>> {
    fn updated_after(self, timestamp: Timestamp) -> Self {
        self.map_builder(|builder| builder.param("updated_after", &timestamp))
    }
}
