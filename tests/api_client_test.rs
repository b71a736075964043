//! Integration tests for the backend client's wire contract and error
//! extraction.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tunegrab::api::client::ApiClient;
use tunegrab::api::types::Quality;
use tunegrab::core::error::AppError;

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(&server.uri()).unwrap()
}

#[tokio::test]
async fn test_fetch_info_parses_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/info"))
        .and(body_json(json!({"url": "https://youtu.be/abc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": {
                "title": "Track",
                "uploader": "Channel",
                "thumbnail": "https://img/t.jpg",
                "view_count": 123456,
                "duration": 321
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let info = client.fetch_info("https://youtu.be/abc").await.unwrap();
    assert_eq!(info.title.as_deref(), Some("Track"));
    assert_eq!(info.uploader.as_deref(), Some("Channel"));
    assert_eq!(info.view_count, Some(123456));
    assert_eq!(info.duration, Some(321));
}

#[tokio::test]
async fn test_request_download_sends_quality_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/download"))
        .and(body_json(json!({"url": "https://youtu.be/abc", "quality": "128"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"filename": "track.mp3"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let filename = client
        .request_download("https://youtu.be/abc", Quality::Kbps128)
        .await
        .unwrap();
    assert_eq!(filename, "track.mp3");
}

#[tokio::test]
async fn test_error_body_message_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/info"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "upstream broke"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_info("https://x/video").await.unwrap_err();
    match err {
        AppError::Remote { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "upstream broke");
        }
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparseable_error_body_gets_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/info"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/download"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": ""})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let err = client.fetch_info("https://x/video").await.unwrap_err();
    assert_eq!(err.user_message(), "Failed to fetch video info");

    // An empty error field falls back the same way
    let err = client
        .request_download("https://x/video", Quality::Kbps320)
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Download failed");
}

#[tokio::test]
async fn test_fetch_file_returns_bytes_and_encodes_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-file/my%20song.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"bytes".as_ref()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let bytes = client.fetch_file("my song.mp3").await.unwrap();
    assert_eq!(bytes, b"bytes");
}

#[tokio::test]
async fn test_fetch_file_missing_is_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/get-file/gone.mp3"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "File not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_file("gone.mp3").await.unwrap_err();
    assert_eq!(err.user_message(), "File not found");
}
