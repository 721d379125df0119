//! The summary report: lessons available now and reviews coming up.

use serde::{Deserialize, Serialize};

use crate::types::{Id, Timestamp};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Summary {
    pub lessons: Vec<SummaryLessons>,
    /// Reviews available now and over the next 24 hours, grouped by hour.
    pub reviews: Vec<SummaryReviews>,
    /// `None` when the user has no reviews scheduled.
    pub next_reviews_at: Option<Timestamp>,
}

impl Summary {
    /// Subjects whose reviews are available at `now`.
    pub fn reviews_available_at(&self, now: Timestamp) -> impl Iterator<Item = Id> + '_ {
        self.reviews
            .iter()
            .filter(move |group| group.available_at <= now)
            .flat_map(|group| group.subject_ids.iter().copied())
    }

    /// Subjects available for lessons.
    pub fn lesson_subject_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.lessons
            .iter()
            .flat_map(|group| group.subject_ids.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SummaryLessons {
    /// Always the top of the current hour.
    pub available_at: Timestamp,
    pub subject_ids: Vec<Id>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SummaryReviews {
    pub available_at: Timestamp,
    pub subject_ids: Vec<Id>,
}
