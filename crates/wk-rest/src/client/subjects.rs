use wanikani_client::Request;

use crate::envelope::{Resource, ResourceSet};
use crate::filters::SubjectFilters;
use crate::subject::Subject;
use crate::types::Id;

impl super::WaniKaniClient {
    /// List subjects.
    pub fn subjects(&self, filters: &SubjectFilters) -> Request<ResourceSet<Subject>> {
        self.request(filters.apply(self.http.get("subjects")))
    }

    /// Get a subject by id.
    pub fn get_subject(&self, id: Id) -> Request<Resource<Subject>> {
        self.get(format!("subjects/{}", id))
    }
}
