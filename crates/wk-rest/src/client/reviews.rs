use wanikani_client::{Request, Result};

use crate::body::{CreateReviewRequest, NewReview};
use crate::envelope::Resource;
use crate::review::{CreateReviewFor, CreateReviewResponse, Review};
use crate::types::{Id, Timestamp};

impl super::WaniKaniClient {
    /// Get a review by id.
    pub fn get_review(&self, id: Id) -> Request<Resource<Review>> {
        self.get(format!("reviews/{}", id))
    }

    /// Record a completed review.
    ///
    /// The answer also carries the assignment and review statistic the
    /// review updated. `created_at` defaults to the time the service
    /// receives the request.
    pub fn create_review(
        &self,
        target: CreateReviewFor,
        incorrect_meaning_answers: u32,
        incorrect_reading_answers: u32,
        created_at: Option<Timestamp>,
    ) -> Result<Request<CreateReviewResponse>> {
        let body = CreateReviewRequest {
            review: NewReview {
                assignment_id: target.assignment_id(),
                subject_id: target.subject_id(),
                incorrect_meaning_answers,
                incorrect_reading_answers,
                created_at,
            },
        };
        let builder = self.http.post("reviews").json(&body)?;
        Ok(self.request(builder))
    }
}
