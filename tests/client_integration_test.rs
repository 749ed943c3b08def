//! Integration tests for the Contentstack Management client against a mock server

use contentstack_management::{
    Auth, AssetUpload, Callback, ClientBuilder, EntriesResponse, EntryResponse, Error, ErrorKind,
    RawResponse, RequestOptions, RetryOn,
};
use serde_json::json;
use std::{sync::mpsc, time::Duration};
use wiremock::{
    matchers::{body_json, header, header_exists, header_regex, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Create a mock server and a client pointed at it
async fn setup() -> (MockServer, contentstack_management::Client) {
    let server = MockServer::start().await;
    let client = ClientBuilder::new()
        .endpoint(server.uri())
        .auth(Auth::authtoken("test-authtoken"))
        .timeout_ms(5000)
        .build()
        .expect("Failed to build client");
    (server, client)
}

#[tokio::test]
async fn test_fetch_entry() -> anyhow::Result<()> {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v3/content_types/blog/entries/blt1"))
        .and(header("api_key", "blt-api-key"))
        .and(header("authtoken", "test-authtoken"))
        .and(header_exists("x-user-agent"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entry": {
                "uid": "blt1",
                "title": "Hello",
                "locale": "en-us",
                "_version": 4,
                "body": "<p>Hi</p>"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .stack("blt-api-key")
        .content_type(Some("blog"))
        .entry(Some("blt1"))
        .fetch()?
        .send()
        .await?;

    assert!(response.is_success());
    let entry: EntryResponse = response.to_model()?;
    assert_eq!(entry.entry.title.as_deref(), Some("Hello"));
    assert_eq!(entry.entry.version, Some(4));
    assert_eq!(entry.entry.extra["body"], "<p>Hi</p>");
    Ok(())
}

#[tokio::test]
async fn test_find_entries_with_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v3/content_types/blog/entries"))
        .and(query_param("include_count", "true"))
        .and(query_param("locale", "fr-fr"))
        .and(header("branch", "development"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [{"uid": "a"}, {"uid": "b"}],
            "count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut entries = client
        .stack("blt-api-key")
        .with_branch("development")
        .content_type(Some("blog"))
        .entry(None);
    entries.add_param("include_count", true).unwrap();

    let response = entries
        .find()
        .unwrap()
        .with_param("locale", "fr-fr")
        .send()
        .await
        .unwrap();
    let list: EntriesResponse = response.to_model().unwrap();
    assert_eq!(list.count, Some(2));
    assert_eq!(list.entries.len(), 2);
}

#[tokio::test]
async fn test_create_sends_json_body() {
    let (server, client) = setup().await;
    let body = json!({"environment": {"name": "staging", "urls": []}});

    Mock::given(method("POST"))
        .and(path("/v3/environments"))
        .and(header("content-type", "application/json"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "notice": "Environment created successfully.",
            "environment": {"name": "staging"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .stack("blt-api-key")
        .environment(None)
        .create(body)
        .unwrap()
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(response.as_json().unwrap()["environment"]["name"], "staging");
}

#[tokio::test]
async fn test_transient_failure_is_retried() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v3/stacks/branches"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/stacks/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"branches": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .stack("blt-api-key")
        .branch(None)
        .find()
        .unwrap()
        .send()
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_retries_exhausted_returns_last_response() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v3/locales"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error_message": "Service unavailable",
            "error_code": 503
        })))
        .expect(4)
        .mount(&server)
        .await;

    let response = client
        .stack("blt-api-key")
        .locale(None)
        .find()
        .unwrap()
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 503);

    let err = response.error_for_status().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_validation_error_is_not_retried() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v3/content_types"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({
                    "error_message": "Content Type creation failed.",
                    "error_code": 141,
                    "errors": {"title": ["is not unique"]}
                }))
                .append_header("x-request-id", "req-422"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .stack("blt-api-key")
        .content_type(None)
        .create(json!({"content_type": {"title": "Blog"}}))
        .unwrap()
        .send()
        .await
        .unwrap();

    let api_error = response.api_error().unwrap().expect("error envelope");
    assert_eq!(api_error.error_code(), Some(141));
    assert_eq!(api_error.errors().unwrap()["title"][0], "is not unique");

    match response.error_for_status() {
        Err(Error::Api {
            status,
            error_code,
            message,
            request_id,
        }) => {
            assert_eq!(status, 422);
            assert_eq!(error_code, Some(141));
            assert_eq!(message, "Content Type creation failed.");
            assert_eq!(request_id.as_deref(), Some("req-422"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_any_failure_retries_not_found() {
    let server = MockServer::start().await;
    let client = ClientBuilder::new()
        .endpoint(server.uri())
        .retries(2)
        .retry_on(RetryOn::AnyFailure)
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/v3/webhooks/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&server)
        .await;

    let response = client
        .stack("blt-api-key")
        .webhook(Some("missing"))
        .fetch()
        .unwrap()
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_send_once_does_not_retry() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v3/roles"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .stack("blt-api-key")
        .role(None)
        .find()
        .unwrap()
        .send_once()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn test_management_token_header() {
    let server = MockServer::start().await;
    let client = ClientBuilder::new()
        .endpoint(server.uri())
        .auth(Auth::management_token("cs-mgmt-token"))
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/v3/stacks/delivery_tokens"))
        .and(header("authorization", "cs-mgmt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tokens": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .stack("blt-api-key")
        .delivery_token(None)
        .find()
        .unwrap()
        .send()
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_asset_upload_is_multipart() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v3/assets"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "notice": "Asset created successfully.",
            "asset": {"uid": "blt-asset", "filename": "logo.png"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let upload = AssetUpload::new("logo.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47]).title("Logo");
    let response = client
        .stack("blt-api-key")
        .asset(None)
        .upload(upload)
        .unwrap()
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn test_branch_delete_forces() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/v3/stacks/branches/feature"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "notice": "Your request to delete branch is in progress."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .stack("blt-api-key")
        .branch(Some("feature"))
        .delete()
        .unwrap()
        .send()
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    let client = ClientBuilder::new()
        .endpoint(server.uri())
        .timeout_ms(100)
        .retries(0)
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/v3/user"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let result = client.user().fetch().unwrap().send().await;
    assert!(matches!(result, Err(Error::Timeout)));
}

struct Recorder {
    tx: mpsc::Sender<Result<u16, String>>,
    retries: u32,
}

impl Callback for Recorder {
    fn on_response(self, response: RawResponse) {
        let _ = self.tx.send(Ok(response.status().as_u16()));
    }

    fn on_failure(self, error: Error) {
        let _ = self.tx.send(Err(format!("{} after {} retries", error, self.retries)));
    }

    fn on_retry(&mut self, _attempt: u32, _reason: &str) {
        self.retries += 1;
    }
}

#[tokio::test]
async fn test_enqueue_reports_through_callback() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v3/organizations"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"organizations": []})))
        .mount(&server)
        .await;

    let (tx, rx) = mpsc::channel();
    let handle = client
        .organization(None)
        .find()
        .unwrap()
        .enqueue(Recorder { tx, retries: 0 });
    handle.await.unwrap();

    assert_eq!(rx.recv().unwrap(), Ok(200));
}
