// src/report/aggregate.rs
// =============================================================================
// Turns raw GitHub data into the numbers and lists the report shows.
//
// Two independent aggregations over the same repository list:
// - Projects: one entry per repo, best available summary, sorted by stars
// - Stats: profile counts, total stars, top languages, date stamp
// =============================================================================

use std::collections::HashMap;

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::debug;

use crate::github::{FetchOutcome, GithubClient, Profile, RepositoryRecord};
use crate::summary::fetch_readme_summary;

/// Summary used when a repo has neither a README nor a description
pub const FALLBACK_SUMMARY: &str = "No description available.";

/// Shown in place of the language list when no repo declares one
pub const NO_LANGUAGES: &str = "—";

pub const MAX_TOP_LANGUAGES: usize = 5;

// e.g. "05 Jan 2024"
const DATE_FORMAT: &str = "%d %b %Y";

// One line of the projects section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: String,
    pub stars: u64,
    pub url: String,
    /// Never empty: README synopsis, then description, then FALLBACK_SUMMARY
    pub summary: String,
}

// Values available to the template as {{key}} placeholders.
// Field names double as placeholder keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedStats {
    pub name: String,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub total_stars: u64,
    pub languages: String,
    pub updated_date: String,
}

impl AggregatedStats {
    pub fn new(profile: &Profile, repos: &[RepositoryRecord], today: NaiveDate) -> Self {
        Self {
            name: profile.name.clone(),
            public_repos: profile.public_repos,
            followers: profile.followers,
            following: profile.following,
            total_stars: total_stars(repos),
            languages: top_languages(repos),
            updated_date: today.format(DATE_FORMAT).to_string(),
        }
    }

    // (placeholder key, rendered value) for every field
    pub fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("public_repos", self.public_repos.to_string()),
            ("followers", self.followers.to_string()),
            ("following", self.following.to_string()),
            ("total_stars", self.total_stars.to_string()),
            ("languages", self.languages.clone()),
            ("updated_date", self.updated_date.clone()),
        ]
    }
}

pub fn total_stars(repos: &[RepositoryRecord]) -> u64 {
    repos.iter().map(|r| r.stars).sum()
}

// Up to MAX_TOP_LANGUAGES languages, most common first, joined with ", ".
//
// Languages with the same count stay in the order they first appeared.
pub fn top_languages(repos: &[RepositoryRecord]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for lang in repos.iter().filter_map(RepositoryRecord::language) {
        match index.get(lang) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(lang, counts.len());
                counts.push((lang, 1));
            }
        }
    }

    if counts.is_empty() {
        return NO_LANGUAGES.to_string();
    }

    // sort_by is stable, which is what keeps first-seen order on ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .iter()
        .take(MAX_TOP_LANGUAGES)
        .map(|(lang, _)| *lang)
        .collect::<Vec<_>>()
        .join(", ")
}

// README synopsis wins, then a non-empty description, then the fallback
pub fn resolve_summary(readme_summary: Option<String>, description: Option<&str>) -> String {
    readme_summary
        .filter(|s| !s.is_empty())
        .or_else(|| description.map(str::to_string))
        .unwrap_or_else(|| FALLBACK_SUMMARY.to_string())
}

// Pairs each repo with its README synopsis (same order) into entries.
// Does not sort.
pub fn assemble_projects(
    repos: &[RepositoryRecord],
    readme_summaries: Vec<Option<String>>,
) -> Vec<ProjectEntry> {
    repos
        .iter()
        .zip(readme_summaries)
        .map(|(repo, readme)| ProjectEntry {
            name: repo.name.clone(),
            stars: repo.stars,
            url: repo.url.clone(),
            summary: resolve_summary(readme, repo.description()),
        })
        .collect()
}

// Highest stars first. Equal stars keep their incoming order.
pub fn rank_projects(mut projects: Vec<ProjectEntry>) -> Vec<ProjectEntry> {
    projects.sort_by(|a, b| b.stars.cmp(&a.stars));
    projects
}

// Fetches every README (at most `concurrency` at a time), builds the
// entries and ranks them.
//
// `buffered` yields results in input order no matter which request finishes
// first, so the pre-sort order is always the fetch order.
pub async fn build_projects(
    client: &GithubClient,
    owner: &str,
    repos: &[RepositoryRecord],
    concurrency: usize,
) -> Vec<ProjectEntry> {
    let summaries: Vec<Option<String>> = stream::iter(repos)
        .map(|repo| async move {
            let outcome = fetch_readme_summary(client, owner, &repo.name).await;
            match &outcome {
                FetchOutcome::FetchError(e) | FetchOutcome::DecodeError(e) => {
                    debug!(repo = %repo.name, outcome = outcome.kind(), error = %e, "readme unavailable");
                }
                _ => debug!(repo = %repo.name, outcome = outcome.kind(), "readme fetched"),
            }
            outcome.ok()
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    rank_projects(assemble_projects(repos, summaries))
}
