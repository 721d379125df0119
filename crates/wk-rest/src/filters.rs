//! Collection filters.
//!
//! Every field is optional: `None` and empty lists leave the filter off the
//! request, so `Default::default()` lists everything.

use wanikani_client::{Present, RequestBuilder};

use crate::srs_stage::SrsStage;
use crate::subject::SubjectType;
use crate::types::{Id, Timestamp};

/// Filters shared by the simple collections (level progressions, resets,
/// spaced repetition systems, voice actors).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdFilters {
    pub ids: Vec<Id>,
    pub updated_after: Option<Timestamp>,
}

impl IdFilters {
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param("ids", &self.ids)
            .param("updated_after", &self.updated_after)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentFilters {
    pub ids: Vec<Id>,
    pub levels: Vec<u32>,
    pub srs_stages: Vec<SrsStage>,
    pub subject_ids: Vec<Id>,
    pub subject_types: Vec<SubjectType>,
    pub available_before: Option<Timestamp>,
    pub available_after: Option<Timestamp>,
    /// Only assignments whose lesson can be done now.
    pub immediately_available_for_lessons: Option<Present>,
    /// Only assignments whose review can be done now.
    pub immediately_available_for_review: Option<Present>,
    pub in_review: Option<Present>,
    pub burned: Option<bool>,
    pub hidden: Option<bool>,
    pub started: Option<bool>,
    pub unlocked: Option<bool>,
    pub updated_after: Option<Timestamp>,
}

impl AssignmentFilters {
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param("ids", &self.ids)
            .param("levels", &self.levels)
            .param("srs_stages", &self.srs_stages)
            .param("subject_ids", &self.subject_ids)
            .param("subject_types", &self.subject_types)
            .param("available_before", &self.available_before)
            .param("available_after", &self.available_after)
            .param(
                "immediately_available_for_lessons",
                &self.immediately_available_for_lessons,
            )
            .param(
                "immediately_available_for_review",
                &self.immediately_available_for_review,
            )
            .param("in_review", &self.in_review)
            .param("burned", &self.burned)
            .param("hidden", &self.hidden)
            .param("started", &self.started)
            .param("unlocked", &self.unlocked)
            .param("updated_after", &self.updated_after)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewStatisticFilters {
    pub hidden: Option<bool>,
    pub ids: Vec<Id>,
    pub subject_ids: Vec<Id>,
    pub subject_types: Vec<SubjectType>,
    pub percentages_greater_than: Option<u32>,
    pub percentages_less_than: Option<u32>,
    pub updated_after: Option<Timestamp>,
}

impl ReviewStatisticFilters {
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param("hidden", &self.hidden)
            .param("ids", &self.ids)
            .param("subject_ids", &self.subject_ids)
            .param("subject_types", &self.subject_types)
            .param("percentages_greater_than", &self.percentages_greater_than)
            .param("percentages_less_than", &self.percentages_less_than)
            .param("updated_after", &self.updated_after)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyMaterialFilters {
    pub hidden: Option<bool>,
    pub ids: Vec<Id>,
    pub subject_ids: Vec<Id>,
    pub subject_types: Vec<SubjectType>,
    pub updated_after: Option<Timestamp>,
}

impl StudyMaterialFilters {
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param("hidden", &self.hidden)
            .param("ids", &self.ids)
            .param("subject_ids", &self.subject_ids)
            .param("subject_types", &self.subject_types)
            .param("updated_after", &self.updated_after)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectFilters {
    pub ids: Vec<Id>,
    pub types: Vec<SubjectType>,
    pub slugs: Vec<String>,
    pub levels: Vec<u32>,
    pub hidden: Option<bool>,
    pub updated_after: Option<Timestamp>,
}

impl SubjectFilters {
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .param("ids", &self.ids)
            .param("types", &self.types)
            .param("slugs", &self.slugs)
            .param("levels", &self.levels)
            .param("hidden", &self.hidden)
            .param("updated_after", &self.updated_after)
    }
}
