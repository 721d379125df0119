//! Per-subject answer statistics.

use serde::{Deserialize, Serialize};

use crate::subject::SubjectType;
use crate::types::{Id, Timestamp};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReviewStatistic {
    pub subject_id: Id,
    pub subject_type: SubjectType,
    pub meaning_correct: u32,
    pub meaning_incorrect: u32,
    pub meaning_current_streak: u32,
    pub meaning_max_streak: u32,
    pub reading_correct: u32,
    pub reading_incorrect: u32,
    pub reading_current_streak: u32,
    pub reading_max_streak: u32,
    /// Rounded percentage computed by the service.
    pub percentage_correct: u32,
    pub created_at: Timestamp,
    pub hidden: bool,
}

impl ReviewStatistic {
    /// Unrounded percentage of correct answers, or `None` before the first
    /// answer.
    pub fn calculate_percentage_correct(&self) -> Option<f64> {
        let correct = self.meaning_correct + self.reading_correct;
        let total = correct + self.meaning_incorrect + self.reading_incorrect;
        if total == 0 {
            return None;
        }
        Some(f64::from(correct) / f64::from(total) * 100.0)
    }
}
