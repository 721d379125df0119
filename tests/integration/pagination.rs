//! Cursor pagination across several pages.

use super::common::{client_for, kana_vocabulary, kanji, page, radical, vocabulary};
use wanikani_api::{ResourceSet, Subject, SubjectFilters, SubjectType};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_walk_all_pages() {
    let mock_server = MockServer::start().await;
    let first_url = format!("{}/subjects?levels=1", mock_server.uri());
    let second_url = format!("{}/subjects?levels=1&page_after_id=2", mock_server.uri());
    let third_url = format!("{}/subjects?levels=1&page_after_id=4", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/subjects"))
        .and(query_param("levels", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &first_url,
            "radical",
            vec![(1, radical(Some("一"))), (2, kanji())],
            5,
            Some(second_url.clone()),
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/subjects"))
        .and(query_param("page_after_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &second_url,
            "vocabulary",
            vec![(3, vocabulary()), (4, kana_vocabulary())],
            5,
            Some(third_url.clone()),
            Some(format!("{}/subjects?levels=1&page_before_id=3", mock_server.uri())),
        )))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/subjects"))
        .and(query_param("page_after_id", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &third_url,
            "radical",
            vec![(5, radical(None))],
            5,
            None,
            Some(format!("{}/subjects?levels=1&page_before_id=5", mock_server.uri())),
        )))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut current: ResourceSet<Subject> = client
        .subjects(&SubjectFilters {
            levels: vec![1],
            ..Default::default()
        })
        .execute()
        .await
        .unwrap()
        .into_result()
        .unwrap();

    let mut kinds = Vec::new();
    let mut pages = 1;
    loop {
        kinds.extend(current.items().map(Subject::subject_type));
        match client.next_page(&current) {
            Some(next) => {
                current = next.execute().await.unwrap().into_result().unwrap();
                pages += 1;
            }
            None => break,
        }
    }

    assert_eq!(pages, 3);
    assert_eq!(
        kinds,
        vec![
            SubjectType::Radical,
            SubjectType::Kanji,
            SubjectType::Vocabulary,
            SubjectType::KanaVocabulary,
            SubjectType::Radical,
        ]
    );
    assert_eq!(current.total_count, 5);
    assert!(!current.has_next_page());

    let back = client.previous_page(&current).expect("last page links back");
    assert_eq!(
        back.builder().url(),
        format!("{}/subjects?levels=1&page_before_id=5", mock_server.uri())
    );
}
