//! Subjects: radicals, kanji, vocabulary and kana-only vocabulary.
//!
//! The payload of a subject does not say which kind it is, so decoding
//! looks at which fields are present (see [`classify_subject`]).
//! Relationships between subjects are lists of ids, never embedded subjects.

use serde::{Deserialize, Deserializer, Serialize};
use wanikani_client::QueryParam;

use crate::types::{Id, Timestamp};

/// The four kinds of subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectType {
    KanaVocabulary,
    Kanji,
    Radical,
    Vocabulary,
}

impl SubjectType {
    /// The wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            SubjectType::KanaVocabulary => "kana_vocabulary",
            SubjectType::Kanji => "kanji",
            SubjectType::Radical => "radical",
            SubjectType::Vocabulary => "vocabulary",
        }
    }
}

impl std::fmt::Display for SubjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryParam for SubjectType {
    fn to_query(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// A meaning of a subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Meaning {
    pub meaning: String,
    pub primary: bool,
    /// Whether the meaning is accepted as a correct answer.
    pub accepted_answer: bool,
}

/// An extra meaning used only to judge answers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuxiliaryMeaning {
    pub meaning: String,
    #[serde(rename = "type")]
    pub kind: AuxiliaryMeaningKind,
}

/// Whitelisted meanings count as correct, blacklisted ones as incorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuxiliaryMeaningKind {
    Whitelist,
    Blacklist,
}

/// Attributes every subject has.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubjectCommon {
    #[serde(default)]
    pub auxiliary_meanings: Vec<AuxiliaryMeaning>,
    pub created_at: Timestamp,
    /// Page on wanikani.com describing the subject.
    pub document_url: String,
    /// Set once the subject is retired from lessons and reviews.
    pub hidden_at: Option<Timestamp>,
    /// Position within the subject's level during lessons.
    pub lesson_position: u32,
    pub level: u32,
    pub meaning_mnemonic: String,
    pub meanings: Vec<Meaning>,
    pub slug: String,
    pub spaced_repetition_system_id: Id,
}

/// A radical. Some radicals have no Unicode characters and are only
/// available as images.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Radical {
    pub characters: Option<String>,
    #[serde(flatten)]
    pub common: SubjectCommon,
    /// Kanji that use this radical.
    #[serde(default)]
    pub amalgamation_subject_ids: Vec<Id>,
    #[serde(default)]
    pub character_images: Vec<CharacterImage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CharacterImage {
    pub url: String,
    pub content_type: String,
    #[serde(default)]
    pub metadata: CharacterImageMetadata,
}

/// Metadata differs by content type: SVGs carry `inline_styles`, PNGs
/// carry `color`, `dimensions` and `style_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CharacterImageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_styles: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Kanji {
    pub characters: String,
    #[serde(flatten)]
    pub common: SubjectCommon,
    /// Vocabulary that use this kanji.
    #[serde(default)]
    pub amalgamation_subject_ids: Vec<Id>,
    /// Radicals that make up this kanji. They must be passed to unlock it.
    #[serde(default)]
    pub component_subject_ids: Vec<Id>,
    pub meaning_hint: Option<String>,
    pub reading_hint: Option<String>,
    pub reading_mnemonic: String,
    pub readings: Vec<KanjiReading>,
    #[serde(default)]
    pub visually_similar_subject_ids: Vec<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KanjiReading {
    pub reading: String,
    pub primary: bool,
    pub accepted_answer: bool,
    #[serde(rename = "type")]
    pub kind: KanjiReadingKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KanjiReadingKind {
    Kunyomi,
    Nanori,
    Onyomi,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vocabulary {
    pub characters: String,
    #[serde(flatten)]
    pub common: SubjectCommon,
    /// Kanji that make up this vocabulary. They must be passed to unlock it.
    #[serde(default)]
    pub component_subject_ids: Vec<Id>,
    #[serde(default)]
    pub context_sentences: Vec<ContextSentence>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
    #[serde(default)]
    pub pronunciation_audios: Vec<PronunciationAudio>,
    pub readings: Vec<VocabularyReading>,
    pub reading_mnemonic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VocabularyReading {
    pub reading: String,
    pub primary: bool,
    pub accepted_answer: bool,
}

/// Vocabulary written only in kana. It has no readings and no components.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KanaVocabulary {
    pub characters: String,
    #[serde(flatten)]
    pub common: SubjectCommon,
    #[serde(default)]
    pub context_sentences: Vec<ContextSentence>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
    #[serde(default)]
    pub pronunciation_audios: Vec<PronunciationAudio>,
}

/// An example sentence with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContextSentence {
    pub ja: String,
    pub en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PronunciationAudio {
    pub url: String,
    /// `audio/mpeg` or `audio/ogg`.
    pub content_type: String,
    pub metadata: PronunciationAudioMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PronunciationAudioMetadata {
    pub gender: String,
    pub source_id: u64,
    pub pronunciation: String,
    pub voice_actor_id: Id,
    pub voice_actor_name: String,
    pub voice_description: String,
}

/// Any subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Subject {
    Radical(Radical),
    Kanji(Kanji),
    Vocabulary(Vocabulary),
    KanaVocabulary(KanaVocabulary),
}

/// Decide which kind of subject a payload is from the fields it carries.
///
/// The rules are checked in order and the first match wins, because the
/// kinds share field names:
/// 1. `readings` present: kanji if it also has `visually_similar_subject_ids`
///    or `amalgamation_subject_ids`, vocabulary otherwise.
/// 2. `amalgamation_subject_ids` or `character_images` present: radical.
/// 3. Anything else: kana vocabulary.
///
/// A field counts as present even when its value is `null`.
pub fn classify_subject(payload: &serde_json::Value) -> SubjectType {
    let has = |field: &str| payload.get(field).is_some();

    if has("readings") {
        if has("visually_similar_subject_ids") || has("amalgamation_subject_ids") {
            SubjectType::Kanji
        } else {
            SubjectType::Vocabulary
        }
    } else if has("amalgamation_subject_ids") || has("character_images") {
        SubjectType::Radical
    } else {
        SubjectType::KanaVocabulary
    }
}

impl<'de> Deserialize<'de> for Subject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = serde_json::Value::deserialize(deserializer)?;

        let subject = match classify_subject(&payload) {
            SubjectType::Radical => serde_json::from_value(payload).map(Subject::Radical),
            SubjectType::Kanji => serde_json::from_value(payload).map(Subject::Kanji),
            SubjectType::Vocabulary => serde_json::from_value(payload).map(Subject::Vocabulary),
            SubjectType::KanaVocabulary => {
                serde_json::from_value(payload).map(Subject::KanaVocabulary)
            }
        };

        subject.map_err(serde::de::Error::custom)
    }
}

impl Subject {
    pub fn subject_type(&self) -> SubjectType {
        match self {
            Subject::Radical(_) => SubjectType::Radical,
            Subject::Kanji(_) => SubjectType::Kanji,
            Subject::Vocabulary(_) => SubjectType::Vocabulary,
            Subject::KanaVocabulary(_) => SubjectType::KanaVocabulary,
        }
    }

    /// Attributes shared by all kinds.
    pub fn common(&self) -> &SubjectCommon {
        match self {
            Subject::Radical(radical) => &radical.common,
            Subject::Kanji(kanji) => &kanji.common,
            Subject::Vocabulary(vocabulary) => &vocabulary.common,
            Subject::KanaVocabulary(vocabulary) => &vocabulary.common,
        }
    }

    /// The characters; only radicals may have none.
    pub fn characters(&self) -> Option<&str> {
        match self {
            Subject::Radical(radical) => radical.characters.as_deref(),
            Subject::Kanji(kanji) => Some(&kanji.characters),
            Subject::Vocabulary(vocabulary) => Some(&vocabulary.characters),
            Subject::KanaVocabulary(vocabulary) => Some(&vocabulary.characters),
        }
    }

    pub fn level(&self) -> u32 {
        self.common().level
    }

    pub fn slug(&self) -> &str {
        &self.common().slug
    }

    pub fn is_hidden(&self) -> bool {
        self.common().hidden_at.is_some()
    }

    /// The primary meaning, if the service marked one.
    pub fn primary_meaning(&self) -> Option<&str> {
        self.common()
            .meanings
            .iter()
            .find(|meaning| meaning.primary)
            .map(|meaning| meaning.meaning.as_str())
    }

    /// Meanings that count as a correct answer.
    pub fn accepted_meanings(&self) -> impl Iterator<Item = &str> {
        self.common()
            .meanings
            .iter()
            .filter(|meaning| meaning.accepted_answer)
            .map(|meaning| meaning.meaning.as_str())
    }
}
