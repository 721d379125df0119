//! Request execution: headers, classification and error propagation.

use super::common::{client_for, init_tracing, resource, TOKEN};
use rstest::rstest;
use serde_json::json;
use wanikani_api::client::{token_fn, ClientConfig, NoToken};
use wanikani_api::rest::VoiceActor;
use wanikani_api::{ErrorKind, Id, WaniKaniClient};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request as MockRequest, ResponseTemplate};

fn voice_actor() -> serde_json::Value {
    resource(
        "voice_actors",
        "voice_actor",
        1,
        json!({"name": "Kyoko", "gender": "female", "description": "Tokyo accent"}),
    )
}

#[tokio::test]
async fn test_every_request_carries_auth_and_revision() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/voice_actors/1"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("Wanikani-Revision", "20170710"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(voice_actor()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let actor = client
        .get_voice_actor(Id(1))
        .execute()
        .await
        .expect("transport should succeed")
        .into_result()
        .expect("service should answer 200");

    assert_eq!(actor.data, VoiceActor {
        name: "Kyoko".to_string(),
        gender: "female".to_string(),
        description: "Tokyo accent".to_string(),
    });
}

#[tokio::test]
async fn test_missing_token_sends_no_authorization() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/voice_actors/1"))
        .and(|request: &MockRequest| !request.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Unauthorized. Nice try.",
            "code": 401
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WaniKaniClient::with_config(
        ClientConfig::builder().with_base_url(mock_server.uri()).build(),
        NoToken,
    )
    .unwrap();

    let response = client.get_voice_actor(Id(1)).execute().await.unwrap();
    let failure = response.failure().expect("401 is a failure");
    assert_eq!(failure.code, 401);
    assert_eq!(failure.message.as_deref(), Some("Unauthorized. Nice try."));
}

#[tokio::test]
async fn test_token_resolved_per_request() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/voice_actors/1"))
        .and(header("Authorization", "Bearer rotated"))
        .respond_with(ResponseTemplate::new(200).set_body_json(voice_actor()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = WaniKaniClient::with_config(
        ClientConfig::builder().with_base_url(mock_server.uri()).build(),
        token_fn(|| async { Some("rotated".to_string()) }),
    )
    .unwrap();

    let request = client.get_voice_actor(Id(1));
    let (first, second) = tokio::join!(request.execute(), request.execute());
    assert!(first.unwrap().is_success());
    assert!(second.unwrap().is_success());
}

#[rstest]
#[case(401, Some("Unauthorized. Nice try."))]
#[case(404, Some("Not found"))]
#[case(422, Some("Validation failed"))]
#[case(429, Some("Rate limit exceeded"))]
#[case(500, None)]
#[tokio::test]
async fn test_non_success_statuses_are_failures(
    #[case] status: u16,
    #[case] message: Option<&str>,
) {
    let mock_server = MockServer::start().await;

    let template = match message {
        Some(message) => ResponseTemplate::new(status).set_body_json(json!({
            "error": message,
            "code": status
        })),
        None => ResponseTemplate::new(status).set_body_string("<html>oops</html>"),
    };
    Mock::given(method("GET"))
        .and(path("/voice_actors/1"))
        .respond_with(template)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.get_voice_actor(Id(1)).execute().await.unwrap();

    let failure = response.failure().expect("non-2xx is a failure");
    assert_eq!(failure.code, status);
    assert_eq!(failure.message.as_deref(), message);

    let err = response.into_result().unwrap_err();
    assert_eq!(err.status(), Some(status));
}

#[tokio::test]
async fn test_undecodable_success_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/voice_actors/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "voice_actor"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_voice_actor(Id(1)).execute().await.unwrap_err();

    assert!(err.is_decode_error(), "{:?}", err);
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_connection_failure_propagates() {
    init_tracing();
    // Bind a port, then free it so nothing is listening there.
    let address = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let client = WaniKaniClient::with_config(
        ClientConfig::builder()
            .with_base_url(format!("http://{}", address))
            .build(),
        NoToken,
    )
    .unwrap();

    let err = client.summary().execute().await.unwrap_err();
    assert!(
        matches!(err.kind, ErrorKind::Connection(_) | ErrorKind::Transport(_)),
        "{:?}",
        err
    );
    assert_eq!(err.status(), None);
}
