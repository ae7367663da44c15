//! Typed client for the Bitly v4 link-shortening HTTP API.

mod client;
mod error;
mod types;

pub use client::{BitlyClient, DEFAULT_API_URL};
pub use error::BitlyError;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> BitlyClient {
        BitlyClient::new(mock_server.uri(), "test-token", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!({
            "link": "https://bit.ly/3xyzabc",
            "id": "bit.ly/3xyzabc",
            "long_url": "https://example.com/a/very/long/path"
        });

        Mock::given(method("POST"))
            .and(path("/shorten"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({
                "long_url": "https://example.com/a/very/long/path"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let link = client
            .shorten("https://example.com/a/very/long/path")
            .await
            .unwrap();

        assert_eq!(link, "https://bit.ly/3xyzabc");
    }

    #[tokio::test]
    async fn test_shorten_api_error() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!({
            "message": "FORBIDDEN",
            "description": "You are not authorized to access this resource"
        });

        Mock::given(method("POST"))
            .and(path("/shorten"))
            .respond_with(ResponseTemplate::new(403).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.shorten("https://example.com").await;

        match result {
            Err(BitlyError::Api { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "You are not authorized to access this resource");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_shorten_undecodable_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/shorten"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.shorten("https://example.com").await;

        assert!(matches!(result, Err(BitlyError::Json(_))));
    }

    #[tokio::test]
    async fn test_no_caching_identical_urls() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!({ "link": "https://bit.ly/3xyzabc" });

        Mock::given(method("POST"))
            .and(path("/shorten"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        client.shorten("https://example.com").await.unwrap();
        client.shorten("https://example.com").await.unwrap();
    }
}
