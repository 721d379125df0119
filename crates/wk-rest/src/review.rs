//! Reviews and the response to creating one.

use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::envelope::{ObjectType, Resource};
use crate::review_statistic::ReviewStatistic;
use crate::srs_stage::{StartedOrBurnedStage, StartedStage};
use crate::types::{Id, Timestamp};

/// A completed review of one subject.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Review {
    pub assignment_id: Id,
    pub subject_id: Id,
    pub spaced_repetition_system_id: Id,
    pub created_at: Timestamp,
    /// Only started subjects can be reviewed.
    pub starting_srs_stage: StartedStage,
    pub ending_srs_stage: StartedOrBurnedStage,
    pub incorrect_meaning_answers: u32,
    pub incorrect_reading_answers: u32,
}

impl Review {
    pub fn incorrect_answers(&self) -> u32 {
        self.incorrect_meaning_answers + self.incorrect_reading_answers
    }
}

/// Answer to `POST /reviews`: the created review plus the resources it
/// changed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateReviewResponse {
    pub id: Id,
    pub object: ObjectType,
    pub url: String,
    pub data_updated_at: Timestamp,
    pub data: Review,
    pub resources_updated: ResourcesUpdated,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourcesUpdated {
    pub assignment: Resource<Assignment>,
    pub review_statistic: Resource<ReviewStatistic>,
}

/// What a new review refers to: an assignment, or the subject of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateReviewFor {
    Assignment(Id),
    Subject(Id),
}

impl CreateReviewFor {
    pub fn assignment_id(self) -> Option<Id> {
        match self {
            CreateReviewFor::Assignment(id) => Some(id),
            CreateReviewFor::Subject(_) => None,
        }
    }

    pub fn subject_id(self) -> Option<Id> {
        match self {
            CreateReviewFor::Assignment(_) => None,
            CreateReviewFor::Subject(id) => Some(id),
        }
    }
}
