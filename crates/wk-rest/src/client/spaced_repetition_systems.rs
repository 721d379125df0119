use wanikani_client::Request;

use crate::envelope::{Resource, ResourceSet};
use crate::filters::IdFilters;
use crate::srs::Srs;
use crate::types::Id;

impl super::WaniKaniClient {
    /// List spaced repetition systems.
    pub fn spaced_repetition_systems(&self, filters: &IdFilters) -> Request<ResourceSet<Srs>> {
        self.request(filters.apply(self.http.get("spaced_repetition_systems")))
    }

    /// Get a spaced repetition system by id.
    pub fn get_spaced_repetition_system(&self, id: Id) -> Request<Resource<Srs>> {
        self.get(format!("spaced_repetition_systems/{}", id))
    }
}
