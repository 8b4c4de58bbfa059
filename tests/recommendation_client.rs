use assessment_recommender::client::{ClientError, RecommendationClient};
use assessment_recommender::models::RecommendationRequest;
use assessment_recommender::session::{NoticeLevel, Session};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{name}")).expect("fixture missing")
}

/// An address nothing is listening on.
fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn health_is_true_only_for_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    assert!(client.check_health().await);
}

#[tokio::test]
async fn health_is_false_for_other_success_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    assert!(!client.check_health().await);
}

#[tokio::test]
async fn health_is_false_when_backend_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    assert!(!client.check_health().await);
}

#[tokio::test]
async fn health_is_false_when_host_is_unreachable() {
    let client = RecommendationClient::new(unreachable_endpoint());
    assert!(!client.check_health().await);
}

#[tokio::test]
async fn recommend_returns_backend_list_verbatim() {
    let fixture = read_fixture("recommendations.json");
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_json(json!({"query": "data analyst", "max_results": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    let assessments = client
        .recommend(&RecommendationRequest::new("data analyst"))
        .await
        .expect("recommend failed");

    let expected: Value = serde_json::from_str(&fixture).expect("fixture json");
    assert_eq!(assessments.len(), 2);
    assert_eq!(
        serde_json::to_value(&assessments).expect("serialize"),
        expected["recommended_assessments"]
    );
}

#[tokio::test]
async fn off_type_items_pass_through_unchanged() {
    let items = json!([
        {"description": "Typing. Speed.", "duration": "30", "test_type": "K"},
        {"description": null, "remote_support": 1, "adaptive_support": [true]},
        {"url": "https://example.com/x", "duration": null}
    ]);
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recommended_assessments": items.clone()})))
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    let mut session = Session::new();
    let assessments = client.get_recommendations(&mut session, "typist", 10).await;

    assert_eq!(session.errors().count(), 0);
    assert_eq!(assessments.len(), 3);
    assert_eq!(serde_json::to_value(&assessments).expect("serialize"), items);
    assert_eq!(assessments[0].test_types(), "K");
    assert_eq!(assessments[0].duration().as_deref(), Some("30"));
    assert_eq!(assessments[1].description(), "");
    assert_eq!(assessments[2].duration(), None);
}

#[tokio::test]
async fn recommend_sends_requested_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_json(json!({"query": "sales manager", "max_results": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recommended_assessments": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    let mut session = Session::new();
    let assessments = client.get_recommendations(&mut session, "sales manager", 3).await;

    assert!(assessments.is_empty());
    assert!(session.notices().is_empty());
}

#[tokio::test]
async fn non_200_yields_empty_list_and_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(500).set_body_string("vector store offline"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    let mut session = Session::new();
    let assessments = client.get_recommendations(&mut session, "data analyst", 10).await;

    assert!(assessments.is_empty());
    let errors: Vec<&str> = session.errors().collect();
    assert_eq!(errors, vec!["API Error: 500 - vector store offline"]);
}

#[tokio::test]
async fn typed_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(422).set_body_string("query required"))
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    let err = client
        .recommend(&RecommendationRequest::new(""))
        .await
        .expect_err("should fail");

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body, "query required");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_json_is_reported_as_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    let mut session = Session::new();
    let assessments = client.get_recommendations(&mut session, "data analyst", 10).await;

    assert!(assessments.is_empty());
    let error = session.errors().next().expect("error notice");
    assert!(error.starts_with("Error connecting to API:"));
}

#[tokio::test]
async fn missing_assessment_key_is_a_failure_not_a_partial_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [{"url": "x"}]})))
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    let mut session = Session::new();
    let assessments = client.get_recommendations(&mut session, "data analyst", 10).await;

    assert!(assessments.is_empty());
    assert_eq!(session.errors().count(), 1);
}

#[tokio::test]
async fn unreachable_backend_yields_empty_list() {
    let client = RecommendationClient::new(unreachable_endpoint());
    let mut session = Session::new();
    let assessments = client.get_recommendations(&mut session, "data analyst", 10).await;

    assert!(assessments.is_empty());
    let notice = &session.notices()[0];
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.starts_with("Error connecting to API:"));
}

#[tokio::test]
async fn failed_health_gate_records_blocking_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let client = RecommendationClient::new(server.uri());
    let mut session = Session::new();
    assert!(!session.ensure_backend(&client).await);
    assert!(!session.ensure_backend(&client).await);
    assert_eq!(session.backend_healthy(), Some(false));
    assert_eq!(session.errors().count(), 1);
}
