//! JSON bodies of the write endpoints.
//!
//! The service expects each body wrapped in a key naming the resource,
//! e.g. `{"study_material": {...}}`. Unset optional fields are left out so
//! updates only touch what the caller set.

use serde::Serialize;

use crate::types::{Id, Timestamp};
use crate::user::PresentationOrder;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StartAssignmentRequest {
    pub assignment: StartAssignment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StartAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CreateReviewRequest {
    pub review: NewReview,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct NewReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<Id>,
    pub incorrect_meaning_answers: u32,
    pub incorrect_reading_answers: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StudyMaterialRequest<T> {
    pub study_material: T,
}

/// Study material for a subject that has none yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewStudyMaterial {
    pub subject_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_synonyms: Option<Vec<String>>,
}

impl NewStudyMaterial {
    pub fn new(subject_id: Id) -> Self {
        Self {
            subject_id,
            meaning_note: None,
            reading_note: None,
            meaning_synonyms: None,
        }
    }
}

/// Changes to existing study material. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudyMaterialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_synonyms: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct UpdateUserRequest {
    pub user: UserUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct UserUpdate {
    pub preferences: PreferencesUpdate,
}

/// Preference changes. `None` leaves a preference as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_study_autoplay_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons_autoplay_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons_batch_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_autoplay_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_display_srs_indicator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_presentation_order: Option<PresentationOrder>,
}
