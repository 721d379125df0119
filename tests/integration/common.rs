#![allow(dead_code)]

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wanikani_api::client::{ClientConfig, StaticToken};
use wanikani_api::WaniKaniClient;
use wiremock::MockServer;

pub const TOKEN: &str = "integration-token";

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> WaniKaniClient {
    init_tracing();
    WaniKaniClient::with_config(
        ClientConfig::builder().with_base_url(server.uri()).build(),
        StaticToken::new(TOKEN),
    )
    .expect("client should build")
}

pub fn resource(path: &str, object: &str, id: u64, data: Value) -> Value {
    json!({
        "id": id,
        "object": object,
        "url": format!("https://api.wanikani.com/v2/{}/{}", path, id),
        "data_updated_at": "2024-01-01T00:00:00.000000Z",
        "data": data
    })
}

/// A collection page of `(id, data)` items with the given cursor links.
pub fn page(
    url: &str,
    object: &str,
    items: Vec<(u64, Value)>,
    total_count: u64,
    next_url: Option<String>,
    previous_url: Option<String>,
) -> Value {
    let data: Vec<_> = items
        .into_iter()
        .map(|(id, data)| resource("items", object, id, data))
        .collect();
    json!({
        "object": "collection",
        "url": url,
        "pages": {"per_page": 2, "next_url": next_url, "previous_url": previous_url},
        "total_count": total_count,
        "data_updated_at": "2024-01-01T00:00:00.000000Z",
        "data": data
    })
}

fn subject_common(slug: &str, meaning: &str, level: u32) -> Value {
    json!({
        "auxiliary_meanings": [{"meaning": "one", "type": "whitelist"}],
        "created_at": "2012-02-27T18:08:16.000000Z",
        "document_url": format!("https://www.wanikani.com/subjects/{}", slug),
        "hidden_at": null,
        "lesson_position": 2,
        "level": level,
        "meaning_mnemonic": "Lying on the <radical>ground</radical> is something that looks just like the ground.",
        "meanings": [
            {"meaning": meaning, "primary": true, "accepted_answer": true},
            {"meaning": "Alt", "primary": false, "accepted_answer": false}
        ],
        "slug": slug,
        "spaced_repetition_system_id": 1
    })
}

fn with(mut base: Value, extra: Value) -> Value {
    if let (Some(base), Value::Object(extra)) = (base.as_object_mut(), extra) {
        base.extend(extra);
    }
    base
}

pub fn radical(characters: Option<&str>) -> Value {
    with(
        subject_common("ground", "Ground", 1),
        json!({
            "characters": characters,
            "amalgamation_subject_ids": [440, 449],
            "character_images": [{
                "url": "https://files.wanikani.com/a7w32gazaor51ii0fbtxzk0wpmpc",
                "content_type": "image/svg+xml",
                "metadata": {"inline_styles": false}
            }]
        }),
    )
}

pub fn kanji() -> Value {
    with(
        subject_common("一", "One", 1),
        json!({
            "characters": "一",
            "amalgamation_subject_ids": [2467, 2468],
            "component_subject_ids": [1],
            "meaning_hint": null,
            "reading_hint": null,
            "reading_mnemonic": "As you're sitting there next to Ground, ...",
            "readings": [
                {"type": "onyomi", "primary": true, "accepted_answer": true, "reading": "いち"},
                {"type": "kunyomi", "primary": false, "accepted_answer": false, "reading": "ひと"},
                {"type": "nanori", "primary": false, "accepted_answer": false, "reading": "かず"}
            ],
            "visually_similar_subject_ids": []
        }),
    )
}

pub fn vocabulary() -> Value {
    with(
        subject_common("一つ", "One Thing", 1),
        json!({
            "characters": "一つ",
            "component_subject_ids": [440],
            "context_sentences": [{"en": "Let's meet up once.", "ja": "一ど、あいましょう。"}],
            "parts_of_speech": ["numeral"],
            "pronunciation_audios": [{
                "url": "https://files.wanikani.com/w4yp5o02betioucki05lp6x78quy",
                "content_type": "audio/mpeg",
                "metadata": {
                    "gender": "male",
                    "source_id": 21630,
                    "pronunciation": "ひとつ",
                    "voice_actor_id": 2,
                    "voice_actor_name": "Kenichi",
                    "voice_description": "Tokyo accent"
                }
            }],
            "readings": [{"primary": true, "reading": "ひとつ", "accepted_answer": true}],
            "reading_mnemonic": "Remember the kanji reading."
        }),
    )
}

pub fn kana_vocabulary() -> Value {
    with(
        subject_common("おやつ", "Snack", 8),
        json!({
            "characters": "おやつ",
            "context_sentences": [],
            "parts_of_speech": ["noun"],
            "pronunciation_audios": []
        }),
    )
}

pub fn assignment(stage: u32, started: bool) -> Value {
    let started_at = started.then_some("2017-09-05T23:41:28.980679Z");
    let available_at = started.then_some("2017-09-06T03:00:00.000000Z");
    json!({
        "created_at": "2017-09-05T23:38:10.695133Z",
        "subject_id": 8761,
        "subject_type": "radical",
        "srs_stage": stage,
        "unlocked_at": "2017-09-05T23:38:10.695133Z",
        "started_at": started_at,
        "passed_at": null,
        "burned_at": null,
        "available_at": available_at,
        "resurrected_at": null,
        "hidden": false
    })
}
