use wanikani_client::Request;

use crate::envelope::Report;
use crate::summary::Summary;

impl super::WaniKaniClient {
    /// Available lessons and reviews, grouped by the hour they open up.
    pub fn summary(&self) -> Request<Report<Summary>> {
        self.get("summary")
    }
}
