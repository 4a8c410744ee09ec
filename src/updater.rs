//! The fetch → derive → diff → persist pipeline.
//!
//! One linear pass per provider, no retries: a failure anywhere aborts the
//! run before anything is written, so a flaky API call can never clobber the
//! previously persisted stats.

use crate::{
    config::Config,
    error::UpdateError,
    providers::{
        LastfmProvider,
        Provider,
        TraktProvider,
    },
    state::PersistedState,
};
use reqwest::Client;
use serde_json::Value;
use std::{
    path::Path,
    time::Duration,
};
use tracing::{
    debug,
    info,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// What one provider update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Something differed; the stats file (and badge, if any) was rewritten.
    Updated,
    /// Every derived field already matched the persisted state.
    Unchanged,
}

pub struct StatsUpdater {
    config: Config,
    client: Client,
}

impl StatsUpdater {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Run the full update cycle: every configured provider, in order.
    pub async fn run(&self) -> Result<Vec<(&'static str, UpdateOutcome)>, UpdateError> {
        let lastfm = LastfmProvider::new(self.config.lastfm.clone());
        let trakt = TraktProvider::new(self.config.trakt.clone());

        let mut outcomes = Vec::with_capacity(2);
        outcomes.push((lastfm.name(), self.update(&lastfm).await?));
        outcomes.push((trakt.name(), self.update(&trakt).await?));
        Ok(outcomes)
    }

    /// Run the pipeline for a single provider.
    pub async fn update(&self, provider: &dyn Provider) -> Result<UpdateOutcome, UpdateError> {
        let snapshot = self.fetch(provider).await?;
        self.update_from_snapshot(provider, &snapshot)
    }

    /// Issue the provider's GET request and decode the body.
    async fn fetch(&self, provider: &dyn Provider) -> Result<Value, UpdateError> {
        let response = provider
            .request(&self.client)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|source| UpdateError::Network {
                provider: provider.name(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            // Strip the query so credentials never end up in error output.
            let mut url = response.url().clone();
            url.set_query(None);
            return Err(UpdateError::Status {
                provider: provider.name(),
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|source| UpdateError::Network {
            provider: provider.name(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|e| UpdateError::Parse {
            provider: provider.name(),
            reason: e.to_string(),
        })
    }

    /// Everything after the network step: derive, diff, conditionally persist.
    fn update_from_snapshot(&self, provider: &dyn Provider, snapshot: &Value) -> Result<UpdateOutcome, UpdateError> {
        let derived = provider.derive(snapshot)?;
        debug!("derived {} field(s) from {}", derived.len(), provider.name());

        let mut state = PersistedState::load(&self.config.output_file)?;
        if !state.apply(&derived) {
            info!("no new stats from {}", provider.name());
            return Ok(UpdateOutcome::Unchanged);
        }

        state.save(&self.config.output_file)?;
        if let Some(svg) = provider.badge(&derived) {
            write_badge(&self.config.badge_file, &svg)?;
        }
        info!(
            "new stats from {}, updated {}",
            provider.name(),
            self.config.output_file.display()
        );
        Ok(UpdateOutcome::Updated)
    }
}

fn write_badge(path: &Path, svg: &str) -> Result<(), UpdateError> {
    let io_err = |source| UpdateError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    std::fs::write(path, svg).map_err(io_err)
}
