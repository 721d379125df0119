use wanikani_client::Request;

use crate::envelope::{Resource, ResourceSet};
use crate::filters::IdFilters;
use crate::voice_actor::VoiceActor;
use crate::types::Id;

impl super::WaniKaniClient {
    /// List voice actors.
    pub fn voice_actors(&self, filters: &IdFilters) -> Request<ResourceSet<VoiceActor>> {
        self.request(filters.apply(self.http.get("voice_actors")))
    }

    /// Get a voice actor by id.
    pub fn get_voice_actor(&self, id: Id) -> Request<Resource<VoiceActor>> {
        self.get(format!("voice_actors/{}", id))
    }
}
