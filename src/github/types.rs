// src/github/types.rs
// =============================================================================
// Data we read from the GitHub REST API.
//
// The API returns far more fields than we need; serde ignores the rest.
// Every field we do read has a default so a partial payload still decodes.
// =============================================================================

use serde::{Deserialize, Deserializer};

// Account-level metadata from GET /users/{username}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

impl Profile {
    // What we report when the profile could not be fetched at all
    pub fn fallback(username: &str) -> Self {
        Self {
            name: username.to_string(),
            public_repos: 0,
            followers: 0,
            following: 0,
        }
    }
}

// Treats an explicit `null` the same as a missing field.
// `#[serde(default)]` alone only covers the missing case.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Raw shape of the /users/{username} payload.
// `name` is null for accounts that never set a display name.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct UserPayload {
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub public_repos: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub following: u64,
}

impl UserPayload {
    pub fn into_profile(self, username: &str) -> Profile {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| username.to_string());

        Profile {
            name,
            public_repos: self.public_repos,
            followers: self.followers,
            following: self.following,
        }
    }
}

// One entry from GET /users/{username}/repos
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(rename = "stargazers_count", default, deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(rename = "html_url", default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RepositoryRecord {
    // Primary language, treating "" the same as null
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

// Payload of GET /repos/{owner}/{repo}/readme.
// `content` is base64 wrapped at 60 columns.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ReadmePayload {
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}
