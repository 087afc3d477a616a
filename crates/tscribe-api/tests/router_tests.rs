//! Router-level tests via `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use tscribe_api::{create_router, ApiConfig, AppState};
use tscribe_llm::LlmConfig;
use tscribe_transcript::TranscriptClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_app() -> axum::Router {
    let state = AppState::new(ApiConfig::default(), LlmConfig::default());
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn index_serves_the_embedded_ui() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("TubeScribe"));
    assert!(html.contains("/api/transcript/extract"));
}

#[tokio::test]
async fn extractors_listing_is_static() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/extractors")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let extractors = body["extractors"].as_array().unwrap();
    assert_eq!(extractors.len(), 4);
    let ids: Vec<&str> = extractors
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["key-quotes", "sales-email", "key-points", "custom"]);
}

#[tokio::test]
async fn invalid_url_gets_tagged_envelope_with_uniform_500() {
    let response = test_app()
        .oneshot(post_json(
            "/api/transcript/extract",
            r#"{"videoUrl": "https://example.com/video"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid YouTube URL");
    assert_eq!(body["kind"], "INVALID_URL");
}

#[tokio::test]
async fn empty_video_url_is_an_invalid_url() {
    // Empty and whitespace-only URLs are classified by the URL parser like
    // any other non-matching string, with the same uniform 500.
    for body in [r#"{"videoUrl": ""}"#, r#"{"videoUrl": "  "}"#] {
        let response = test_app()
            .oneshot(post_json("/api/transcript/extract", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid YouTube URL");
        assert_eq!(body["kind"], "INVALID_URL");
    }
}

#[tokio::test]
async fn models_without_backend_uri_fail_with_descriptive_error() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/models")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["kind"], "MISSING_CONFIG");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("MODEL_SERVER_URI"));
}

#[tokio::test]
async fn extract_round_trip_against_mock_watch_origin() {
    let server = MockServer::start().await;

    let base_url = format!("{}/api/timedtext?v=dQw4w9WgXcQ&lang=en", server.uri());
    let player = format!(
        r#"{{"captions":{{"playerCaptionsTracklistRenderer":{{"captionTracks":[
            {{"baseUrl":"{base_url}","languageCode":"en"}}
        ]}}}}}}"#
    );
    let html =
        format!("<script>ytInitialPlayerResponse = {player};var meta = document;</script>");

    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"events":[{"segs":[{"utf8":"Hello"}]},{"segs":[{"utf8":"world"}]},{}]}"#,
        ))
        .mount(&server)
        .await;

    let state = AppState::new(ApiConfig::default(), LlmConfig::default())
        .with_transcript_client(TranscriptClient::with_watch_base(server.uri()));
    let app = create_router(state);

    let response = app
        .oneshot(post_json(
            "/api/transcript/extract",
            r#"{"videoUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["transcript"], "Hello world");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().get("X-Request-ID").is_some());
}
