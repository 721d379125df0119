//! Response envelopes.
//!
//! Every endpoint answers with one of three shapes: a single [`Resource`],
//! a paginated [`ResourceSet`], or a [`Report`] (summary and user).

use serde::{Deserialize, Serialize};

use crate::types::{Id, Timestamp};

/// The kind of object an envelope carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Collection,
    Report,
    Assignment,
    KanaVocabulary,
    Kanji,
    LevelProgression,
    Radical,
    Reset,
    ReviewStatistic,
    Review,
    SpacedRepetitionSystem,
    StudyMaterial,
    User,
    Vocabulary,
    VoiceActor,
    /// A kind this library does not know yet.
    #[serde(other)]
    Unknown,
}

/// A single resource.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Resource<T> {
    pub id: Id,
    pub object: ObjectType,
    pub url: String,
    /// Last time this particular resource was updated.
    pub data_updated_at: Timestamp,
    pub data: T,
}

/// A page of resources.
///
/// `data_updated_at` is the most recent update across the whole filtered
/// scope (not only this page), or `None` when the scope is empty.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceSet<T> {
    pub object: ObjectType,
    /// The request URL, including all filters.
    pub url: String,
    pub data_updated_at: Option<Timestamp>,
    pub data: Vec<Resource<T>>,
    pub pages: Pages,
    /// Number of resources across all pages.
    pub total_count: u64,
}

impl<T> ResourceSet<T> {
    /// True when there is a page after this one.
    pub fn has_next_page(&self) -> bool {
        self.pages.next_url.is_some()
    }

    /// Iterate over the payloads of this page, dropping the per-item envelope.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.data.iter().map(|resource| &resource.data)
    }
}

/// Cursor links of a collection page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pages {
    pub next_url: Option<String>,
    pub previous_url: Option<String>,
    pub per_page: u32,
}

/// A report, i.e. an aggregate that is not a stored resource.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Report<T> {
    pub object: ObjectType,
    pub url: String,
    pub data_updated_at: Timestamp,
    pub data: T,
}
