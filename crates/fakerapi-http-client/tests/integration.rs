//! Integration tests for fakerapi-http-client using mockito

use fakerapi_http_client::{HttpClient, HttpError};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct TestResponse {
    success: bool,
    data: String,
}

#[tokio::test]
async fn test_fetch_success() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/data")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "data": "hello"}"#)
        .create_async()
        .await;

    let client = HttpClient::new();
    let url = format!("{}/api/data", server.url());
    let result: Result<TestResponse, _> = client.fetch(&url).await;

    let response = result.expect("Fetch should succeed");
    assert!(response.success);
    assert_eq!(response.data, "hello");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_error_status() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/error")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let client = HttpClient::new();
    let url = format!("{}/api/error", server.url());
    let result: Result<TestResponse, _> = client.fetch(&url).await;

    if let Err(HttpError::Status { status, message }) = result {
        assert_eq!(status, 404);
        assert_eq!(message, "Not Found");
    } else {
        panic!("Expected HttpError::Status");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_server_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/server-error")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = HttpClient::new();
    let url = format!("{}/api/server-error", server.url());
    let result: Result<TestResponse, _> = client.fetch(&url).await;

    if let Err(HttpError::Status { status, .. }) = result {
        assert_eq!(status, 500);
    } else {
        panic!("Expected HttpError::Status");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_invalid_json_is_serialization_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/invalid-json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not valid json")
        .create_async()
        .await;

    let client = HttpClient::new();
    let url = format!("{}/api/invalid-json", server.url());
    let result: Result<TestResponse, _> = client.fetch(&url).await;

    let err = result.expect_err("Should be a deserialization error");
    assert!(
        matches!(err, HttpError::Serialization(_)),
        "Expected HttpError::Serialization, got: {}",
        err
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_convenience_function() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/convenience")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "data": "convenience"}"#)
        .create_async()
        .await;

    let url = format!("{}/api/convenience", server.url());
    let result: Result<TestResponse, _> = fakerapi_http_client::fetch(&url).await;

    let response = result.expect("Fetch should succeed");
    assert!(response.success);
    assert_eq!(response.data, "convenience");

    mock.assert_async().await;
}

#[cfg(feature = "blocking")]
mod blocking {
    use fakerapi_http_client::blocking::HttpClient;
    use fakerapi_http_client::HttpError;

    use super::TestResponse;

    #[test]
    fn test_blocking_fetch_success() {
        let mut server = mockito::Server::new();

        let mock = server
            .mock("GET", "/api/data")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": "hello"}"#)
            .create();

        let client = HttpClient::new();
        let url = format!("{}/api/data", server.url());
        let result: Result<TestResponse, _> = client.fetch(&url);

        let response = result.expect("Fetch should succeed");
        assert!(response.success);
        assert_eq!(response.data, "hello");

        mock.assert();
    }

    #[test]
    fn test_blocking_fetch_error_status() {
        let mut server = mockito::Server::new();

        let mock = server
            .mock("GET", "/api/error")
            .with_status(404)
            .with_body("Not Found")
            .create();

        let client = HttpClient::new();
        let url = format!("{}/api/error", server.url());
        let result: Result<TestResponse, _> = client.fetch(&url);

        if let Err(HttpError::Status { status, message }) = result {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        } else {
            panic!("Expected HttpError::Status");
        }

        mock.assert();
    }

    #[test]
    fn test_blocking_one_shot_fetch() {
        let mut server = mockito::Server::new();

        let mock = server
            .mock("GET", "/api/one-shot")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": "one-shot"}"#)
            .create();

        let url = format!("{}/api/one-shot", server.url());
        let result: Result<TestResponse, _> = fakerapi_http_client::blocking::fetch(&url);

        let response = result.expect("Fetch should succeed");
        assert_eq!(response.data, "one-shot");

        mock.assert();
    }
}
