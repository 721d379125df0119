//! Level progressions.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// The user's progress through one level.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelProgression {
    pub level: u32,
    pub unlocked_at: Option<Timestamp>,
    pub started_at: Option<Timestamp>,
    pub passed_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub abandoned_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
}

impl LevelProgression {
    pub fn is_passed(&self) -> bool {
        self.passed_at.is_some()
    }

    pub fn is_abandoned(&self) -> bool {
        self.abandoned_at.is_some()
    }
}
