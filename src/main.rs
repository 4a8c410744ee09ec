//! # Profile Stats Gatherer - Main Entry Point
//!
//! Fetches the latest stats from Last.fm and Trakt.tv and rewrites the local
//! stats JSON (and Trakt SVG card) only when something actually changed.
//! Meant to run as a periodic scheduled job; exits 0 on success or no-op,
//! non-zero on any configuration, network, or parse failure.

use clap::Parser;
use color_eyre::Result;
use profile_stats_gatherer::{
    config::Config,
    updater::{
        StatsUpdater,
        UpdateOutcome,
    },
};
use std::path::PathBuf;
use tracing::info;
use url::Url;

#[derive(Parser)]
#[command(name = "profile-stats-gatherer")]
#[command(about = "Keeps profile stats from Last.fm and Trakt.tv up to date")]
#[command(version)]
struct Cli {
    /// Last.fm username
    #[arg(long, env = "LASTFM_USERNAME")]
    lastfm_user: Option<String>,

    /// Last.fm API key
    #[arg(long, env = "LASTFM_API_KEY", hide_env_values = true)]
    lastfm_api_key: Option<String>,

    /// How many recent tracks to request (only the first is used)
    #[arg(long, env = "LASTFM_LIMIT", default_value_t = 1)]
    lastfm_limit: u32,

    /// Last.fm API base URL
    #[arg(long, env = "LASTFM_API_URL", default_value = "http://ws.audioscrobbler.com/2.0/")]
    lastfm_api_url: Url,

    /// Trakt.tv username
    #[arg(long, env = "TRAKT_USERNAME")]
    trakt_user: Option<String>,

    /// Trakt.tv API key (client id)
    #[arg(long, env = "TRAKT_API_KEY", hide_env_values = true)]
    trakt_api_key: Option<String>,

    /// Trakt.tv API base URL
    #[arg(long, env = "TRAKT_API_URL", default_value = "https://api.trakt.tv")]
    trakt_api_url: Url,

    /// Where the merged stats JSON is kept
    #[arg(long, default_value = "assets/stats.json")]
    output_file: PathBuf,

    /// Where the Trakt SVG card is written
    #[arg(long, default_value = "assets/trakt_card.svg")]
    badge_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("profile_stats_gatherer={log_level}"))
        .init();

    color_eyre::install()?;

    info!("Starting profile stats update");

    // Credentials are validated here, before any network call.
    let config = Config::new(
        cli.lastfm_user,
        cli.lastfm_api_key,
        cli.lastfm_limit,
        cli.lastfm_api_url,
        cli.trakt_user,
        cli.trakt_api_key,
        cli.trakt_api_url,
        cli.output_file,
        cli.badge_file,
    )?;
    info!("Output file: {}", config.output_file.display());

    let updater = StatsUpdater::new(config);
    let outcomes = updater.run().await?;

    let updated = outcomes
        .iter()
        .filter(|(_, outcome)| *outcome == UpdateOutcome::Updated)
        .count();
    if updated == 0 {
        info!("No new stats detected");
    } else {
        info!("New stats detected from {updated} provider(s)");
    }

    Ok(())
}
