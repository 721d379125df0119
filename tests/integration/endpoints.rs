//! End-to-end decoding of the main resources.

use super::common::{assignment, client_for, kana_vocabulary, kanji, page, radical, resource, vocabulary};
use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::json;
use std::time::Duration;
use wanikani_api::rest::{
    AssignmentFilters, IntervalUnit, KanjiReadingKind, Srs, StartedStage, Subject,
};
use wanikani_api::{CollectionRequestExt, CreateReviewFor, Id, IdFilters, SrsStage, SubjectType};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[rstest]
#[case::radical(radical(None), "radical", SubjectType::Radical)]
#[case::kanji(kanji(), "kanji", SubjectType::Kanji)]
#[case::vocabulary(vocabulary(), "vocabulary", SubjectType::Vocabulary)]
#[case::kana_vocabulary(kana_vocabulary(), "kana_vocabulary", SubjectType::KanaVocabulary)]
#[tokio::test]
async fn test_get_subject_of_each_kind(
    #[case] data: serde_json::Value,
    #[case] object: &str,
    #[case] expected: SubjectType,
) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subjects/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(resource(
            "subjects", object, 1, data,
        )))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let subject = client
        .get_subject(Id(1))
        .execute()
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(subject.data.subject_type(), expected);
    assert!(subject.data.primary_meaning().is_some());
    assert_eq!(subject.data.accepted_meanings().count(), 1);
}

#[tokio::test]
async fn test_kanji_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subjects/440"))
        .respond_with(ResponseTemplate::new(200).set_body_json(resource(
            "subjects",
            "kanji",
            440,
            kanji(),
        )))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let subject = client
        .get_subject(Id(440))
        .execute()
        .await
        .unwrap()
        .into_result()
        .unwrap();

    let Subject::Kanji(kanji) = &subject.data else {
        panic!("expected a kanji, got {:?}", subject.data);
    };
    assert_eq!(kanji.characters, "一");
    assert_eq!(kanji.component_subject_ids, vec![Id(1)]);
    let kinds: Vec<_> = kanji.readings.iter().map(|reading| reading.kind).collect();
    assert_eq!(
        kinds,
        vec![KanjiReadingKind::Onyomi, KanjiReadingKind::Kunyomi, KanjiReadingKind::Nanori]
    );
}

#[tokio::test]
async fn test_available_reviews_then_review() {
    let mock_server = MockServer::start().await;
    let since = Utc.with_ymd_and_hms(2017, 9, 1, 0, 0, 0).unwrap();

    Mock::given(method("GET"))
        .and(path("/assignments"))
        .and(query_param("immediately_available_for_review", ""))
        .and(query_param("subject_types", "radical"))
        .and(query_param("updated_after", "2017-09-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "https://api.wanikani.com/v2/assignments",
            "assignment",
            vec![(80463006, assignment(6, true))],
            1,
            None,
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let set = client
        .assignments(&AssignmentFilters {
            immediately_available_for_review: Some(wanikani_api::Present),
            subject_types: vec![SubjectType::Radical],
            ..Default::default()
        })
        .updated_after(since)
        .execute()
        .await
        .unwrap()
        .into_result()
        .unwrap();

    let due = &set.data[0];
    assert_eq!(due.data.srs_stage, SrsStage::Guru2);
    let now = Utc.with_ymd_and_hms(2017, 9, 6, 4, 0, 0).unwrap();
    assert!(due.data.is_available_for_review(now));

    // Three wrong answers at Guru drop the subject four stages.
    let started = StartedStage::try_from(due.data.srs_stage).unwrap();
    assert_eq!(started.after_review(3).stage(), SrsStage::Apprentice2);

    let mut answer = resource(
        "reviews",
        "review",
        9,
        json!({
            "created_at": "2017-09-06T04:00:00.000000Z",
            "assignment_id": 80463006,
            "spaced_repetition_system_id": 1,
            "subject_id": 8761,
            "starting_srs_stage": 6,
            "ending_srs_stage": 2,
            "incorrect_meaning_answers": 3,
            "incorrect_reading_answers": 0
        }),
    );
    answer["resources_updated"] = json!({
        "assignment": resource("assignments", "assignment", 80463006, assignment(2, true)),
        "review_statistic": resource("review_statistics", "review_statistic", 1, json!({
            "created_at": "2017-09-05T23:38:10.964821Z",
            "subject_id": 8761,
            "subject_type": "radical",
            "meaning_correct": 5,
            "meaning_incorrect": 3,
            "meaning_max_streak": 5,
            "meaning_current_streak": 0,
            "reading_correct": 0,
            "reading_incorrect": 0,
            "reading_max_streak": 0,
            "reading_current_streak": 0,
            "percentage_correct": 63,
            "hidden": false
        }))
    });

    Mock::given(method("POST"))
        .and(path("/reviews"))
        .and(body_json(json!({
            "review": {
                "assignment_id": 80463006,
                "incorrect_meaning_answers": 3,
                "incorrect_reading_answers": 0
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(answer))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client
        .create_review(CreateReviewFor::Assignment(due.id), 3, 0, None)
        .unwrap()
        .execute()
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(created.data.ending_srs_stage, started.after_review(3));
    assert_eq!(
        created.resources_updated.assignment.data.srs_stage,
        SrsStage::Apprentice2
    );
    let percentage = created
        .resources_updated
        .review_statistic
        .data
        .calculate_percentage_correct()
        .unwrap();
    assert!((percentage - 62.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_spaced_repetition_system_intervals() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaced_repetition_systems"))
        .and(query_param("ids", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "https://api.wanikani.com/v2/spaced_repetition_systems?ids=1",
            "spaced_repetition_system",
            vec![(1, json!({
                "created_at": "2020-05-21T20:46:06.464460Z",
                "name": "Default system for dictionary subjects",
                "description": "The original spaced repetition system",
                "unlocking_stage_position": 0,
                "starting_stage_position": 1,
                "passing_stage_position": 5,
                "burning_stage_position": 9,
                "stages": [
                    {"interval": null, "position": 0, "interval_unit": null},
                    {"interval": 14400, "position": 1, "interval_unit": "seconds"},
                    {"interval": 2, "position": 5, "interval_unit": "weeks"},
                    {"interval": null, "position": 9, "interval_unit": null}
                ]
            }))],
            1,
            None,
            None,
        )))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let set = client
        .spaced_repetition_systems(&IdFilters {
            ids: vec![Id(1)],
            ..Default::default()
        })
        .execute()
        .await
        .unwrap()
        .into_result()
        .unwrap();

    let system: &Srs = set.items().next().unwrap();
    assert_eq!(
        system.stage(1).and_then(|stage| stage.interval_duration()),
        Some(Duration::from_secs(4 * 60 * 60))
    );
    assert_eq!(system.stage(5).unwrap().interval_unit, Some(IntervalUnit::Weeks));
    assert_eq!(
        system.stage(5).unwrap().interval_duration(),
        Some(Duration::from_secs(14 * 24 * 60 * 60))
    );
    assert_eq!(system.stage(9).unwrap().interval_duration(), None);
}

#[tokio::test]
async fn test_out_of_range_review_stage_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reviews/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(resource(
            "reviews",
            "review",
            3,
            json!({
                "created_at": "2017-09-06T04:00:00.000000Z",
                "assignment_id": 1,
                "spaced_repetition_system_id": 1,
                "subject_id": 1,
                "starting_srs_stage": 0,
                "ending_srs_stage": 1,
                "incorrect_meaning_answers": 0,
                "incorrect_reading_answers": 0
            }),
        )))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_review(Id(3)).execute().await.unwrap_err();

    assert!(err.is_decode_error());
    assert!(err.to_string().contains("invalid SRS stage value: 0"), "{}", err);
}
