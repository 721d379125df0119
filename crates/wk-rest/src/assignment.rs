//! Assignments: the user's progress on one subject.

use serde::{Deserialize, Serialize};

use crate::srs_stage::SrsStage;
use crate::subject::SubjectType;
use crate::types::{Id, Timestamp};

/// Progress on a subject.
///
/// The service documents `unlocked_at <= started_at <= passed_at <=
/// burned_at`; the timestamps are passed through as received.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Assignment {
    pub subject_id: Id,
    pub subject_type: SubjectType,
    pub srs_stage: SrsStage,
    pub created_at: Option<Timestamp>,
    /// When the next review is due. `None` while locked, in lessons, or burned.
    pub available_at: Option<Timestamp>,
    pub resurrected_at: Option<Timestamp>,
    pub unlocked_at: Option<Timestamp>,
    pub started_at: Option<Timestamp>,
    pub passed_at: Option<Timestamp>,
    pub burned_at: Option<Timestamp>,
    pub hidden: bool,
    #[serde(default)]
    pub passed: bool,
    #[serde(default)]
    pub level: Option<u32>,
}

impl Assignment {
    /// Unlocked but the lesson has not been done yet.
    pub fn is_in_lessons(&self) -> bool {
        self.started_at.is_none() && self.srs_stage == SrsStage::Unlocked
    }

    /// Due for review at `now`.
    pub fn is_available_for_review(&self, now: Timestamp) -> bool {
        self.srs_stage.is_started() && self.available_at.is_some_and(|at| at <= now)
    }
}
