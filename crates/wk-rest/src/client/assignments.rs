use wanikani_client::{Request, Result};

use crate::assignment::Assignment;
use crate::body::{StartAssignment, StartAssignmentRequest};
use crate::envelope::{Resource, ResourceSet};
use crate::filters::AssignmentFilters;
use crate::types::{Id, Timestamp};

impl super::WaniKaniClient {
    /// List assignments.
    pub fn assignments(&self, filters: &AssignmentFilters) -> Request<ResourceSet<Assignment>> {
        self.request(filters.apply(self.http.get("assignments")))
    }

    /// Get an assignment by id.
    pub fn get_assignment(&self, id: Id) -> Request<Resource<Assignment>> {
        self.get(format!("assignments/{}", id))
    }

    /// Mark an assignment as started, i.e. its lesson as done.
    ///
    /// `started_at` defaults to the time the service receives the request.
    pub fn start_assignment(
        &self,
        id: Id,
        started_at: Option<Timestamp>,
    ) -> Result<Request<Resource<Assignment>>> {
        let body = StartAssignmentRequest {
            assignment: StartAssignment { started_at },
        };
        let builder = self
            .http
            .put(format!("assignments/{}/start", id))
            .json(&body)?;
        Ok(self.request(builder))
    }
}
