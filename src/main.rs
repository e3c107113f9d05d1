// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, to stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Resolve a RunConfig (fails fast if no username is configured)
// 4. Dispatch to the generate or stats handler
// 5. Exit with proper code (0 = success, 2 = error)
//
// stdout only carries the progress lines (or the stats output), so it stays
// readable in CI logs.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validated run settings
mod github; // src/github/ - GitHub REST API client
mod pipeline; // src/pipeline.rs - fetch, aggregate, render, write
mod report; // src/report/ - aggregation and Markdown rendering
mod summary; // src/summary/ - README synopsis extraction

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, GenerateArgs};
use config::RunConfig;
use github::GithubClient;
use report::AggregatedStats;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr; default level is warn so a normal run only
// shows the two progress lines
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = RunConfig::from_args(&cli.github)?;
    let client = GithubClient::new(&config.api_base, config.timeout)?;

    match cli.command {
        Some(Commands::Generate(args)) => handle_generate(&client, &config, &args).await,
        Some(Commands::Stats { json }) => handle_stats(&client, &config, json).await,
        None => handle_generate(&client, &config, &GenerateArgs::default()).await,
    }
}

// Handles the 'generate' subcommand (also the default)
async fn handle_generate(client: &GithubClient, config: &RunConfig, args: &GenerateArgs) -> Result<()> {
    println!("🔍 Fetching GitHub stats for {}...", config.username);

    let today = chrono::Local::now().date_naive();
    let resume = pipeline::build_resume(client, config, args.readme_concurrency, today).await?;

    pipeline::write_resume(&args.template, &args.output, &resume).await?;

    println!("✅ {} updated successfully!", args.output.display());
    Ok(())
}

// Handles the 'stats' subcommand
async fn handle_stats(client: &GithubClient, config: &RunConfig, json: bool) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let stats = pipeline::collect_stats(client, config, today).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_table(&stats);
    }
    Ok(())
}

// Prints stats as placeholder / value pairs, the same keys a template uses
fn print_table(stats: &AggregatedStats) {
    println!("{:<16} {}", "PLACEHOLDER", "VALUE");
    println!("{}", "=".repeat(48));

    for (key, value) in stats.placeholders() {
        println!("{:<16} {}", report::placeholder(key), value);
    }
}
