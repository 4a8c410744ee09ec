use crate::{
    badge,
    config::TraktConfig,
    error::UpdateError,
    providers::Provider,
    stats::{
        DerivedStats,
        WatchStats,
    },
};
use reqwest::{
    Client,
    RequestBuilder,
};
use serde_json::Value;

/// Fetches watch-time statistics from the Trakt.tv user stats endpoint.
pub struct TraktProvider {
    config: TraktConfig,
    stats_url: String,
}

impl TraktProvider {
    pub fn new(config: TraktConfig) -> Self {
        let stats_url = format!(
            "{}/users/{}/stats",
            config.endpoint.as_str().trim_end_matches('/'),
            config.username
        );
        Self { config, stats_url }
    }
}

impl Provider for TraktProvider {
    fn name(&self) -> &'static str {
        "trakt.tv"
    }

    fn request(&self, client: &Client) -> RequestBuilder {
        client
            .get(&self.stats_url)
            .header("Content-Type", "application/json")
            .header("trakt-api-version", "2")
            .header("trakt-api-key", &self.config.api_key)
    }

    fn derive(&self, snapshot: &Value) -> Result<DerivedStats, UpdateError> {
        Ok(WatchStats::from_snapshot(snapshot)?.fields())
    }

    fn badge(&self, stats: &DerivedStats) -> Option<String> {
        Some(badge::watch_card(stats))
    }
}
