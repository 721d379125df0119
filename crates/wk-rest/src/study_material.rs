//! User-written notes and synonyms attached to a subject.

use serde::{Deserialize, Serialize};

use crate::subject::SubjectType;
use crate::types::{Id, Timestamp};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StudyMaterial {
    pub meaning_note: Option<String>,
    #[serde(default)]
    pub meaning_synonyms: Vec<String>,
    pub reading_note: Option<String>,
    pub subject_id: Id,
    pub subject_type: SubjectType,
    pub hidden: bool,
    pub created_at: Timestamp,
}
