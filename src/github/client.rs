// src/github/client.rs
// =============================================================================
// A small client for the three GitHub REST resources we read:
//
// - GET /users/{username}                     -> Profile
// - GET /users/{username}/repos?per_page=100  -> Vec<RepositoryRecord>
// - GET /repos/{owner}/{repo}/readme          -> base64 README content
//
// All requests are anonymous and read-only. Only the first page of
// repositories is fetched.
//
// None of these methods return Err. Each one returns a FetchOutcome so the
// caller decides whether a failure is fatal or just means "use a default".
// =============================================================================

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::error::GithubError;
use super::outcome::FetchOutcome;
use super::types::{Profile, ReadmePayload, RepositoryRecord, UserPayload};

/// Public GitHub API origin
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repositories requested in the single page we fetch
pub const REPOS_PER_PAGE: u32 = 100;

// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_base: Url,
}

impl GithubClient {
    // Builds a client rooted at `api_base` (normally DEFAULT_API_BASE).
    //
    // A base with a path, like a GitHub Enterprise `https://host/api/v3`,
    // works too: endpoint segments are appended after it.
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, GithubError> {
        let parsed = Url::parse(api_base).map_err(|e| GithubError::InvalidBaseUrl {
            url: api_base.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(GithubError::InvalidBaseUrl {
                url: api_base.to_string(),
                reason: "expected an http(s) URL".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base: parsed,
        })
    }

    pub async fn fetch_profile(&self, username: &str) -> FetchOutcome<Profile> {
        let url = self.endpoint(&["users", username]);
        self.get_json::<UserPayload>(url, &format!("profile of {}", username))
            .await
            .map(|payload| payload.into_profile(username))
    }

    // One page, most recently updated first
    pub async fn fetch_repositories(&self, username: &str) -> FetchOutcome<Vec<RepositoryRecord>> {
        let mut url = self.endpoint(&["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &REPOS_PER_PAGE.to_string())
            .append_pair("sort", "updated");

        self.get_json(url, &format!("repositories of {}", username))
            .await
    }

    // Returns the still-encoded `content` field of a README.
    // An empty field counts as NotFound.
    pub async fn fetch_readme(&self, owner: &str, repo: &str) -> FetchOutcome<String> {
        let url = self.endpoint(&["repos", owner, repo, "readme"]);
        match self
            .get_json::<ReadmePayload>(url, &format!("readme of {}/{}", owner, repo))
            .await
        {
            FetchOutcome::Success(payload) if payload.content.trim().is_empty() => {
                FetchOutcome::NotFound
            }
            other => other.map(|payload| payload.content),
        }
    }

    // Appends path segments to the API base, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        // new() already rejected cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> FetchOutcome<T> {
        debug!(%url, "GET");

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::FetchError(e.into()),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return FetchOutcome::NotFound;
        }
        if !status.is_success() {
            return FetchOutcome::FetchError(GithubError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return FetchOutcome::FetchError(e.into()),
        };

        match serde_json::from_str(&body) {
            Ok(value) => FetchOutcome::Success(value),
            Err(source) => FetchOutcome::DecodeError(GithubError::Json {
                context: context.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> GithubClient {
        GithubClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let result = GithubClient::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(GithubError::InvalidBaseUrl { .. })));

        let result = GithubClient::new("mailto:someone@example.com", Duration::from_secs(1));
        assert!(matches!(result, Err(GithubError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client =
            GithubClient::new("https://ghe.example.com/api/v3/", Duration::from_secs(1)).unwrap();
        let url = client.endpoint(&["users", "ada"]);
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/users/ada");
    }

    #[test]
    fn test_endpoint_escapes_segments() {
        let client = GithubClient::new(DEFAULT_API_BASE, Duration::from_secs(1)).unwrap();
        let url = client.endpoint(&["users", "a/b"]);
        assert_eq!(url.as_str(), "https://api.github.com/users/a%2Fb");
    }

    #[tokio::test]
    async fn test_fetch_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ada"))
            .and(header("accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "login": "ada",
                "name": "Ada Lovelace",
                "public_repos": 2,
                "followers": 10,
                "following": 3
            })))
            .mount(&server)
            .await;

        let profile = test_client(&server).fetch_profile("ada").await.ok().unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.public_repos, 2);
        assert_eq!(profile.followers, 10);
        assert_eq!(profile.following, 3);
    }

    #[tokio::test]
    async fn test_fetch_profile_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
            .mount(&server)
            .await;

        let outcome = test_client(&server).fetch_profile("ghost").await;
        assert!(matches!(outcome, FetchOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_fetch_profile_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ada"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let outcome = test_client(&server).fetch_profile("ada").await;
        assert!(matches!(
            outcome,
            FetchOutcome::FetchError(GithubError::UnexpectedStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_profile_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ada"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let outcome = test_client(&server).fetch_profile("ada").await;
        assert!(matches!(outcome, FetchOutcome::DecodeError(GithubError::Json { .. })));
    }

    #[tokio::test]
    async fn test_fetch_repositories_single_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ada/repos"))
            .and(query_param("per_page", "100"))
            .and(query_param("sort", "updated"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "alpha", "stargazers_count": 5, "html_url": "https://github.com/ada/alpha",
                 "language": "Go", "description": "A tool"},
                {"name": "beta", "stargazers_count": 20, "html_url": "https://github.com/ada/beta",
                 "language": null, "description": null}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let repos = test_client(&server)
            .fetch_repositories("ada")
            .await
            .ok()
            .unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "alpha");
        assert_eq!(repos[0].language(), Some("Go"));
        assert_eq!(repos[1].stars, 20);
        assert_eq!(repos[1].description(), None);
    }

    #[tokio::test]
    async fn test_fetch_repositories_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ada/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let repos = test_client(&server).fetch_repositories("ada").await;
        assert!(matches!(repos, FetchOutcome::Success(ref r) if r.is_empty()));
    }

    #[tokio::test]
    async fn test_fetch_repositories_error_object_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ada/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "weird"})))
            .mount(&server)
            .await;

        let repos = test_client(&server).fetch_repositories("ada").await;
        assert!(matches!(repos, FetchOutcome::DecodeError(_)));
    }

    #[tokio::test]
    async fn test_fetch_readme_empty_content_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/ada/alpha/readme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": ""})))
            .mount(&server)
            .await;

        let outcome = test_client(&server).fetch_readme("ada", "alpha").await;
        assert!(matches!(outcome, FetchOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_fetch_readme_null_content_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/ada/alpha/readme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": null})))
            .mount(&server)
            .await;

        let outcome = test_client(&server).fetch_readme("ada", "alpha").await;
        assert!(matches!(outcome, FetchOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_fetch_profile_null_counts_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/ada"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Ada Lovelace", "public_repos": null, "followers": null, "following": 3
            })))
            .mount(&server)
            .await;

        let profile = test_client(&server).fetch_profile("ada").await.ok().unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.public_repos, 0);
        assert_eq!(profile.following, 3);
    }

    #[tokio::test]
    async fn test_fetch_readme_returns_raw_content() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/ada/alpha/readme"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"encoding": "base64", "content": "SGk=\n"})),
            )
            .mount(&server)
            .await;

        let outcome = test_client(&server).fetch_readme("ada", "alpha").await;
        assert_eq!(outcome.ok().as_deref(), Some("SGk=\n"));
    }
}
