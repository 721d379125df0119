use wanikani_client::Request;

use crate::envelope::{Resource, ResourceSet};
use crate::filters::IdFilters;
use crate::reset::Reset;
use crate::types::Id;

impl super::WaniKaniClient {
    /// List resets.
    pub fn resets(&self, filters: &IdFilters) -> Request<ResourceSet<Reset>> {
        self.request(filters.apply(self.http.get("resets")))
    }

    /// Get a reset by id.
    pub fn get_reset(&self, id: Id) -> Request<Resource<Reset>> {
        self.get(format!("resets/{}", id))
    }
}
