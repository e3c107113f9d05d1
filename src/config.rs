// src/config.rs
// =============================================================================
// Validated settings for one run, built from the parsed CLI.
//
// Everything downstream takes a &RunConfig (or the pieces it needs) as a
// parameter. Nothing reads the environment after this point.
// =============================================================================

use std::time::Duration;

use anyhow::{bail, Result};

use crate::cli::GithubArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub username: String,
    pub api_base: String,
    pub timeout: Duration,
    pub strict: bool,
}

impl RunConfig {
    // The only hard precondition: we need a username.
    // A blank value counts as missing.
    pub fn from_args(args: &GithubArgs) -> Result<Self> {
        let username = match args.username.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => bail!("GITHUB_USERNAME not set! Export it or pass --username <NAME>"),
        };

        if args.timeout_secs == 0 {
            bail!("--timeout-secs must be at least 1");
        }

        Ok(Self {
            username,
            api_base: args.api_base.trim().to_string(),
            timeout: Duration::from_secs(args.timeout_secs),
            strict: args.strict,
        })
    }
}
