//! SRS stages and the stage-transition rule.
//!
//! A stage is a plain integer on the wire. 0 is [`SrsStage::Unlocked`]
//! (available as a lesson), 1 to 8 are the started stages, and 9 is
//! [`SrsStage::Burned`]. [`StartedStage`] and [`StartedOrBurnedStage`] are
//! the narrowed forms used by reviews; they refuse anything outside 1..8 and
//! 1..9 respectively.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wanikani_client::QueryParam;

/// An integer that is not a stage of the expected kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid SRS stage value: {value} (expected {expected})")]
pub struct InvalidSrsStage {
    pub value: u32,
    /// The accepted range, e.g. `1..8`.
    pub expected: &'static str,
}

/// A stage in the spaced repetition schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SrsStage {
    Unlocked,
    Apprentice1,
    Apprentice2,
    Apprentice3,
    Apprentice4,
    Guru1,
    Guru2,
    Master,
    Enlightened,
    Burned,
}

impl SrsStage {
    /// Every stage in ascending order.
    pub const ALL: [SrsStage; 10] = [
        SrsStage::Unlocked,
        SrsStage::Apprentice1,
        SrsStage::Apprentice2,
        SrsStage::Apprentice3,
        SrsStage::Apprentice4,
        SrsStage::Guru1,
        SrsStage::Guru2,
        SrsStage::Master,
        SrsStage::Enlightened,
        SrsStage::Burned,
    ];

    /// Map an integer to its stage.
    pub fn new(value: u32) -> Result<Self, InvalidSrsStage> {
        match value {
            0..=9 => Ok(Self::clamped(value)),
            _ => Err(InvalidSrsStage {
                value,
                expected: "0..9",
            }),
        }
    }

    fn clamped(value: u32) -> Self {
        match value {
            0 => SrsStage::Unlocked,
            1 => SrsStage::Apprentice1,
            2 => SrsStage::Apprentice2,
            3 => SrsStage::Apprentice3,
            4 => SrsStage::Apprentice4,
            5 => SrsStage::Guru1,
            6 => SrsStage::Guru2,
            7 => SrsStage::Master,
            8 => SrsStage::Enlightened,
            _ => SrsStage::Burned,
        }
    }

    /// The wire value.
    pub fn value(self) -> u32 {
        match self {
            SrsStage::Unlocked => 0,
            SrsStage::Apprentice1 => 1,
            SrsStage::Apprentice2 => 2,
            SrsStage::Apprentice3 => 3,
            SrsStage::Apprentice4 => 4,
            SrsStage::Guru1 => 5,
            SrsStage::Guru2 => 6,
            SrsStage::Master => 7,
            SrsStage::Enlightened => 8,
            SrsStage::Burned => 9,
        }
    }

    /// Stages 1 to 8.
    pub fn is_started(self) -> bool {
        (1..=8).contains(&self.value())
    }

    /// Stages 1 to 9.
    pub fn is_started_or_burned(self) -> bool {
        self != SrsStage::Unlocked
    }

    /// Guru or above. Passing a subject unlocks the subjects built from it.
    pub fn is_passed(self) -> bool {
        self >= SrsStage::Guru1
    }
}

impl TryFrom<u32> for SrsStage {
    type Error = InvalidSrsStage;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        SrsStage::new(value)
    }
}

impl From<SrsStage> for u32 {
    fn from(stage: SrsStage) -> Self {
        stage.value()
    }
}

impl fmt::Display for SrsStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl QueryParam for SrsStage {
    fn to_query(&self) -> Option<String> {
        Some(self.value().to_string())
    }
}

/// Map a sequence of integers to stages, failing on the first invalid one.
pub fn srs_stages(values: impl IntoIterator<Item = u32>) -> Result<Vec<SrsStage>, InvalidSrsStage> {
    values.into_iter().map(SrsStage::new).collect()
}

/// A stage in 1..8: the subject has been started but not burned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StartedStage(SrsStage);

impl StartedStage {
    pub fn new(value: u32) -> Result<Self, InvalidSrsStage> {
        match value {
            1..=8 => Ok(StartedStage(SrsStage::clamped(value))),
            _ => Err(InvalidSrsStage {
                value,
                expected: "1..8",
            }),
        }
    }

    pub fn stage(self) -> SrsStage {
        self.0
    }

    pub fn value(self) -> u32 {
        self.0.value()
    }

    /// The stage reached after a review with `incorrect` wrong answers.
    pub fn after_review(self, incorrect: u32) -> StartedOrBurnedStage {
        // Never below 1 and never above 9 for a started input.
        let next = calculate_new_srs_stage(self.value(), incorrect).max(1);
        StartedOrBurnedStage(SrsStage::clamped(next))
    }
}

/// A stage in 1..9: started or burned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StartedOrBurnedStage(SrsStage);

impl StartedOrBurnedStage {
    pub fn new(value: u32) -> Result<Self, InvalidSrsStage> {
        match value {
            1..=9 => Ok(StartedOrBurnedStage(SrsStage::clamped(value))),
            _ => Err(InvalidSrsStage {
                value,
                expected: "1..9",
            }),
        }
    }

    pub fn stage(self) -> SrsStage {
        self.0
    }

    pub fn value(self) -> u32 {
        self.0.value()
    }

    pub fn is_burned(self) -> bool {
        self.0 == SrsStage::Burned
    }
}

macro_rules! narrowed_stage_conversions {
    ($($narrowed:ident),*) => {
        $(
            impl TryFrom<u32> for $narrowed {
                type Error = InvalidSrsStage;

                fn try_from(value: u32) -> Result<Self, Self::Error> {
                    $narrowed::new(value)
                }
            }

            impl TryFrom<SrsStage> for $narrowed {
                type Error = InvalidSrsStage;

                fn try_from(stage: SrsStage) -> Result<Self, Self::Error> {
                    $narrowed::new(stage.value())
                }
            }

            impl From<$narrowed> for u32 {
                fn from(stage: $narrowed) -> Self {
                    stage.value()
                }
            }

            impl From<$narrowed> for SrsStage {
                fn from(stage: $narrowed) -> Self {
                    stage.0
                }
            }

            impl fmt::Display for $narrowed {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }

            impl QueryParam for $narrowed {
                fn to_query(&self) -> Option<String> {
                    self.0.to_query()
                }
            }
        )*
    };
}

narrowed_stage_conversions!(StartedStage, StartedOrBurnedStage);

impl From<StartedStage> for StartedOrBurnedStage {
    fn from(stage: StartedStage) -> Self {
        StartedOrBurnedStage(stage.0)
    }
}

/// Next stage after a review.
///
/// No incorrect answers moves one stage up. Otherwise the stage drops by
/// half the incorrect answers (rounded up), doubled from Guru onwards, and
/// never falls below 1.
pub fn calculate_new_srs_stage(current_stage: u32, incorrect_answers: u32) -> u32 {
    if incorrect_answers == 0 {
        return current_stage.saturating_add(1);
    }

    let adjustment = incorrect_answers.div_ceil(2);
    let penalty = if current_stage >= 5 { 2 } else { 1 };
    current_stage
        .saturating_sub(adjustment.saturating_mul(penalty))
        .max(1)
}
