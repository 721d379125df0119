use wanikani_client::Request;

use crate::envelope::{Resource, ResourceSet};
use crate::filters::IdFilters;
use crate::level_progression::LevelProgression;
use crate::types::Id;

impl super::WaniKaniClient {
    /// List level progressions.
    pub fn level_progressions(&self, filters: &IdFilters) -> Request<ResourceSet<LevelProgression>> {
        self.request(filters.apply(self.http.get("level_progressions")))
    }

    /// Get a level progression by id.
    pub fn get_level_progression(&self, id: Id) -> Request<Resource<LevelProgression>> {
        self.get(format!("level_progressions/{}", id))
    }
}
