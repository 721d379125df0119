//! The user report.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// The owner of the API token.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    pub level: u32,
    pub started_at: Timestamp,
    /// Set while the user is on vacation.
    #[serde(default)]
    pub current_vacation_started_at: Option<Timestamp>,
    pub preferences: Preferences,
    pub subscription: Subscription,
    pub profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preferences {
    pub extra_study_autoplay_audio: bool,
    pub lessons_autoplay_audio: bool,
    /// Subjects introduced per lesson batch before the quiz.
    pub lessons_batch_size: u32,
    pub reviews_autoplay_audio: bool,
    pub reviews_display_srs_indicator: bool,
    pub reviews_presentation_order: PresentationOrder,
    /// Deprecated by the service: always 1 and cannot be set.
    #[serde(default)]
    pub default_voice_actor_id: u64,
    /// Deprecated by the service: always `ascending_level_then_subject`.
    #[serde(default)]
    pub lessons_presentation_order: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationOrder {
    Shuffled,
    LowerLevelsFirst,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Subscription {
    pub active: bool,
    /// Highest level whose content the user may access. Applications must
    /// respect this limit.
    pub max_level_granted: u32,
    /// `None` for free and lifetime subscriptions.
    pub period_ends_at: Option<Timestamp>,
    #[serde(rename = "type")]
    pub kind: SubscriptionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionKind {
    Free,
    Recurring,
    Lifetime,
}
