// src/summary/mod.rs
// =============================================================================
// README decoding and synopsis extraction.
//
// readme.rs is pure: no network, no files. fetch_readme_summary() glues it
// to the GitHub client so the aggregator gets one call per repository.
// =============================================================================

mod readme;

pub use readme::{decode_readme_content, summarize_readme};

use crate::github::{FetchOutcome, GithubClient};

// Fetches, decodes and summarizes one repository's README.
//
// Outcomes:
//   Success(text)  the synopsis, at most 300 chars plus "..."
//   NotFound       no README, empty content, or nothing but blank lines
//   FetchError     the request itself failed
//   DecodeError    bad JSON or bad base64
pub async fn fetch_readme_summary(
    client: &GithubClient,
    owner: &str,
    repo: &str,
) -> FetchOutcome<String> {
    match client.fetch_readme(owner, repo).await {
        FetchOutcome::Success(content) => {
            let context = format!("readme of {}/{}", owner, repo);
            match decode_readme_content(&content, &context) {
                Ok(text) => match summarize_readme(&text) {
                    Some(summary) => FetchOutcome::Success(summary),
                    None => FetchOutcome::NotFound,
                },
                Err(e) => FetchOutcome::DecodeError(e),
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve_readme(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/repos/ada/alpha/readme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_summary_from_encoded_readme() {
        let server = MockServer::start().await;
        // "# Alpha\n\nFast\nparser.\n\nMore."
        serve_readme(&server, json!({"content": "IyBBbHBoYQoKRmFzdApwYXJz\nZXIuCgpNb3JlLg==\n"})).await;

        let client = GithubClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let outcome = fetch_readme_summary(&client, "ada", "alpha").await;
        assert_eq!(outcome.ok().as_deref(), Some("# Alpha"));
    }

    #[tokio::test]
    async fn test_bad_base64_is_decode_error() {
        let server = MockServer::start().await;
        serve_readme(&server, json!({"content": "***"})).await;

        let client = GithubClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let outcome = fetch_readme_summary(&client, "ada", "alpha").await;
        assert!(matches!(outcome, FetchOutcome::DecodeError(_)));
    }

    #[tokio::test]
    async fn test_missing_readme_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/ada/alpha/readme"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = GithubClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
        let outcome = fetch_readme_summary(&client, "ada", "alpha").await;
        assert!(matches!(outcome, FetchOutcome::NotFound));
    }
}
