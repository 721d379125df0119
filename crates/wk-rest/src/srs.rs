//! Spaced repetition systems.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// A spaced repetition system: the stages a subject goes through and how
/// long each one lasts.
///
/// The `*_stage_position` fields line up with the assignment timestamps:
/// reaching the unlocking position sets `unlocked_at`, and so on.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Srs {
    pub name: String,
    pub description: String,
    pub unlocking_stage_position: u32,
    pub starting_stage_position: u32,
    pub passing_stage_position: u32,
    pub burning_stage_position: u32,
    pub stages: Vec<Stage>,
    pub created_at: Timestamp,
}

impl Srs {
    /// The stage at `position`, if the system has one.
    pub fn stage(&self, position: u32) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.position == position)
    }
}

/// One stage of a system. The unlocking and burning stages have no
/// interval.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stage {
    #[serde(rename = "interval")]
    pub interval_length: Option<u64>,
    pub interval_unit: Option<IntervalUnit>,
    pub position: u32,
}

impl Stage {
    /// Time added to the review time before the next review.
    pub fn interval_duration(&self) -> Option<Duration> {
        let length = self.interval_length?;
        Some(self.interval_unit?.to_duration(length))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl IntervalUnit {
    pub fn to_duration(self, length: u64) -> Duration {
        let seconds_per_unit = match self {
            IntervalUnit::Seconds => 1,
            IntervalUnit::Minutes => 60,
            IntervalUnit::Hours => 60 * 60,
            IntervalUnit::Days => 24 * 60 * 60,
            IntervalUnit::Weeks => 7 * 24 * 60 * 60,
        };
        Duration::from_secs(length.saturating_mul(seconds_per_unit))
    }
}
