// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The username can come from --username or the GITHUB_USERNAME environment
// variable (clap's `env` feature), which is how CI jobs usually pass it.
//
// Running with no subcommand is the same as `gh-resume generate`.
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::github::DEFAULT_API_BASE;

pub const DEFAULT_TEMPLATE_PATH: &str = "templates/resume_template.md";
pub const DEFAULT_OUTPUT_PATH: &str = "Resume.md";
pub const DEFAULT_README_CONCURRENCY: usize = 4;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(
    name = "gh-resume",
    version,
    about = "Render a Markdown resume from a GitHub user's public profile",
    long_about = "gh-resume reads a user's public GitHub profile and repositories, ranks the projects \
                  by stars, and fills a Markdown template with the results. \
                  It's meant to run in a scheduled CI job that commits the updated resume."
)]
pub struct Cli {
    #[command(flatten)]
    pub github: GithubArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Options shared by every subcommand
#[derive(Args, Debug)]
pub struct GithubArgs {
    /// GitHub username whose profile is rendered
    #[arg(long, env = "GITHUB_USERNAME", global = true)]
    pub username: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Fail the run if the profile or repository list can't be fetched,
    /// instead of rendering zeros
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch everything and write the rendered resume (the default)
    ///
    /// Example: GITHUB_USERNAME=octocat gh-resume generate --output Resume.md
    Generate(GenerateArgs),

    /// Print the aggregated statistics without touching any files
    ///
    /// Example: gh-resume --username octocat stats --json
    Stats {
        /// Output the statistics as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Markdown template containing {{placeholders}}
    #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// Where the rendered resume is written (overwritten if it exists)
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// How many README requests may be in flight at once
    #[arg(long, default_value_t = DEFAULT_README_CONCURRENCY)]
    pub readme_concurrency: usize,
}

// Used when no subcommand is given; must match the clap defaults above
impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            readme_concurrency: DEFAULT_README_CONCURRENCY,
        }
    }
}
