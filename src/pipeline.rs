// src/pipeline.rs
// =============================================================================
// One run, start to finish:
//
// 1. Fetch the profile and the repository list (one request each)
// 2. Aggregate stats from both
// 3. Build the ranked project list (one README request per repo)
// 4. Render the template and write the output file
//
// Only configuration and file I/O errors stop the run. Fetch failures fall
// back to defaults and are logged, unless `strict` is set.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::github::{FetchOutcome, GithubClient, Profile, RepositoryRecord};
use crate::report::{build_projects, render_projects, render_template, AggregatedStats, ProjectEntry};

// Everything the template needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    pub stats: AggregatedStats,
    pub projects: Vec<ProjectEntry>,
}

// Unwraps a fetch outcome, or falls back (with a warning) when not strict
fn settle<T>(
    outcome: FetchOutcome<T>,
    what: &str,
    strict: bool,
    fallback: impl FnOnce() -> T,
) -> Result<T> {
    if strict {
        return outcome
            .into_result(|| format!("{} not found", what))
            .with_context(|| format!("Failed to fetch {}", what));
    }

    match outcome {
        FetchOutcome::Success(value) => Ok(value),
        FetchOutcome::NotFound => {
            warn!(what, "not found on GitHub, using defaults");
            Ok(fallback())
        }
        FetchOutcome::FetchError(e) | FetchOutcome::DecodeError(e) => {
            warn!(what, error = %e, "fetch failed, using defaults");
            Ok(fallback())
        }
    }
}

pub async fn load_profile(client: &GithubClient, config: &RunConfig) -> Result<Profile> {
    let outcome = client.fetch_profile(&config.username).await;
    let what = format!("profile of {}", config.username);
    settle(outcome, &what, config.strict, || Profile::fallback(&config.username))
}

pub async fn load_repositories(
    client: &GithubClient,
    config: &RunConfig,
) -> Result<Vec<RepositoryRecord>> {
    let outcome = client.fetch_repositories(&config.username).await;
    let what = format!("repositories of {}", config.username);
    let repos = settle(outcome, &what, config.strict, Vec::new)?;
    info!(count = repos.len(), "repositories fetched");
    Ok(repos)
}

// Stats only; no README requests
pub async fn collect_stats(
    client: &GithubClient,
    config: &RunConfig,
    today: NaiveDate,
) -> Result<AggregatedStats> {
    let profile = load_profile(client, config).await?;
    let repos = load_repositories(client, config).await?;
    Ok(AggregatedStats::new(&profile, &repos, today))
}

pub async fn build_resume(
    client: &GithubClient,
    config: &RunConfig,
    readme_concurrency: usize,
    today: NaiveDate,
) -> Result<Resume> {
    let profile = load_profile(client, config).await?;
    let repos = load_repositories(client, config).await?;

    let stats = AggregatedStats::new(&profile, &repos, today);
    let projects = build_projects(client, &config.username, &repos, readme_concurrency).await;

    Ok(Resume { stats, projects })
}

pub fn render_resume(template: &str, resume: &Resume) -> String {
    let projects_md = render_projects(&resume.projects);
    render_template(template, &resume.stats, &projects_md)
}

// Reads the template, renders, and overwrites `output`
pub async fn write_resume(template_path: &Path, output_path: &Path, resume: &Resume) -> Result<()> {
    let template = tokio::fs::read_to_string(template_path)
        .await
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;

    let rendered = render_resume(&template, resume);

    tokio::fs::write(output_path, rendered)
        .await
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    Ok(())
}
