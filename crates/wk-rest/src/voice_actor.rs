//! Voice actors behind the pronunciation audio.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VoiceActor {
    pub name: String,
    pub gender: String,
    pub description: String,
}
