// src/github/outcome.rs
// =============================================================================
// The result of a single GitHub fetch.
//
// A plain Result<T, E> would lump "the resource does not exist" in with
// "the network broke". FetchOutcome keeps four cases apart so callers (and
// tests) can see exactly what happened, then pick their own fallback.
// =============================================================================

use super::error::GithubError;

#[derive(Debug)]
pub enum FetchOutcome<T> {
    /// The resource was fetched and decoded
    Success(T),
    /// GitHub answered 404, or the resource had no content
    NotFound,
    /// Transport failure or a non-404 error status
    FetchError(GithubError),
    /// We got a response but could not make sense of the body
    DecodeError(GithubError),
}

impl<T> FetchOutcome<T> {
    // Drops the failure detail, keeping only the value if there is one
    pub fn ok(self) -> Option<T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Success(value) => FetchOutcome::Success(f(value)),
            FetchOutcome::NotFound => FetchOutcome::NotFound,
            FetchOutcome::FetchError(e) => FetchOutcome::FetchError(e),
            FetchOutcome::DecodeError(e) => FetchOutcome::DecodeError(e),
        }
    }

    // Short label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FetchOutcome::Success(_) => "success",
            FetchOutcome::NotFound => "not_found",
            FetchOutcome::FetchError(_) => "fetch_error",
            FetchOutcome::DecodeError(_) => "decode_error",
        }
    }

    // Converts into a Result for callers that treat every failure as fatal.
    // NotFound has no underlying error, so the caller supplies the message.
    pub fn into_result(self, not_found: impl FnOnce() -> String) -> anyhow::Result<T> {
        match self {
            FetchOutcome::Success(value) => Ok(value),
            FetchOutcome::NotFound => Err(anyhow::anyhow!(not_found())),
            FetchOutcome::FetchError(e) | FetchOutcome::DecodeError(e) => Err(e.into()),
        }
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why not Option<T>?
//    - Option only says "got it" or "didn't"
//    - When a report comes out with zero stars, the logs should say whether
//      the user has no stars or the request failed
//
// 2. Why is map() hand written?
//    - FetchOutcome is our own enum, so it doesn't get Option's helpers for
//      free; map() lets the client reshape a payload without unpacking it
// -----------------------------------------------------------------------------
