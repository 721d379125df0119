//! # wanikani-rest
//!
//! Typed access to every resource of the WaniKani API v2.
//!
//! ## Features
//!
//! - **Subjects** - Radicals, kanji, vocabulary and kana vocabulary, told
//!   apart by the shape of their payload
//! - **Assignments** - SRS progress per subject, including starting lessons
//! - **Reviews** - Record reviews and read back the updated assignment
//! - **Study materials** - Personal notes and synonyms
//! - **Reports** - Summary of available lessons and reviews, user profile
//! - **Pagination** - Follow `next_url` / `previous_url` one page at a time
//! - **Conditional requests** - `If-None-Match` / `If-Modified-Since` with
//!   304 decoded as "no change"
//!
//! ## Example
//!
//! ```rust,ignore
//! use wanikani_rest::{AssignmentFilters, Present, WaniKaniClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wanikani_rest::Error> {
//!     let client = WaniKaniClient::from_env()?;
//!
//!     // Lessons available now
//!     let lessons = client
//!         .assignments(&AssignmentFilters {
//!             immediately_available_for_lessons: Some(Present),
//!             ..Default::default()
//!         })
//!         .execute()
//!         .await?
//!         .into_result()?;
//!
//!     // Poll the summary, only downloading it when it changed
//!     let summary = client.summary().execute().await?;
//!     if let Some(etag) = summary.success().and_then(|s| s.etag.clone()) {
//!         let again = client.summary().if_none_match(etag).execute().await?;
//!         assert!(again.success().map_or(false, |s| s.body.is_none()));
//!     }
//!
//!     Ok(())
//! }
//! ```

mod assignment;
mod body;
mod client;
mod envelope;
mod filters;
mod level_progression;
mod reset;
mod review;
mod review_statistic;
mod srs;
mod srs_stage;
mod study_material;
mod subject;
mod summary;
mod types;
mod user;
mod voice_actor;

// Main client
pub use client::{CollectionRequestExt, WaniKaniClient};

// Envelopes
pub use envelope::{ObjectType, Pages, Report, Resource, ResourceSet};

// Subjects
pub use subject::{
    classify_subject, AuxiliaryMeaning, AuxiliaryMeaningKind, CharacterImage,
    CharacterImageMetadata, ContextSentence, KanaVocabulary, Kanji, KanjiReading,
    KanjiReadingKind, Meaning, PronunciationAudio, PronunciationAudioMetadata, Radical, Subject,
    SubjectCommon, SubjectType, Vocabulary, VocabularyReading,
};

// SRS stages
pub use srs::{IntervalUnit, Srs, Stage};
pub use srs_stage::{
    calculate_new_srs_stage, srs_stages, InvalidSrsStage, SrsStage, StartedOrBurnedStage,
    StartedStage,
};

// Resources
pub use assignment::Assignment;
pub use level_progression::LevelProgression;
pub use reset::Reset;
pub use review::{CreateReviewFor, CreateReviewResponse, ResourcesUpdated, Review};
pub use review_statistic::ReviewStatistic;
pub use study_material::StudyMaterial;
pub use summary::{Summary, SummaryLessons, SummaryReviews};
pub use user::{Preferences, PresentationOrder, Subscription, SubscriptionKind, User};
pub use voice_actor::VoiceActor;

// Write bodies and filters
pub use body::{NewStudyMaterial, PreferencesUpdate, StudyMaterialUpdate};
pub use filters::{
    AssignmentFilters, IdFilters, ReviewStatisticFilters, StudyMaterialFilters, SubjectFilters,
};

// Common types
pub use types::{Id, Timestamp};

// Re-export wanikani-client types that users might need
pub use wanikani_client::{
    ApiResponse, ClientConfig, ClientConfigBuilder, ConditionalRequest, Error, ErrorKind,
    Failure, Present, Request, Result, Success,
};
