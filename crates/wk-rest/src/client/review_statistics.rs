use wanikani_client::Request;

use crate::envelope::{Resource, ResourceSet};
use crate::filters::ReviewStatisticFilters;
use crate::review_statistic::ReviewStatistic;
use crate::types::Id;

impl super::WaniKaniClient {
    /// List review statistics.
    pub fn review_statistics(
        &self,
        filters: &ReviewStatisticFilters,
    ) -> Request<ResourceSet<ReviewStatistic>> {
        self.request(filters.apply(self.http.get("review_statistics")))
    }

    /// Get a review statistic by id.
    pub fn get_review_statistic(&self, id: Id) -> Request<Resource<ReviewStatistic>> {
        self.get(format!("review_statistics/{}", id))
    }
}
