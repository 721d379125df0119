//! Account resets.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// A reset of the user's progress back to `target_level`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Reset {
    pub original_level: u32,
    pub target_level: u32,
    pub created_at: Timestamp,
    /// `None` until the user confirms the reset.
    pub confirmed_at: Option<Timestamp>,
}
