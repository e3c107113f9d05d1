// src/github/mod.rs
// =============================================================================
// This module handles everything we read from the GitHub REST API.
//
// Currently implements:
// - Fetching a user's profile
// - Fetching one page (up to 100) of a user's repositories
// - Fetching a repository's README
//
// Requests are anonymous, and only the first page of repositories is read.
// =============================================================================

mod client;
mod error;
mod outcome;
mod types;

pub use client::{GithubClient, DEFAULT_API_BASE};
pub use error::GithubError;
pub use outcome::FetchOutcome;
pub use types::{Profile, RepositoryRecord};
