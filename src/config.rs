//! Configuration for one update run.
//!
//! Credentials and paths come in through CLI flags (each backed by an
//! environment variable, see `main.rs`) and are validated here, before any
//! network call is made. The rest of the pipeline only ever sees this
//! explicit struct; nothing reads the environment after startup.

use crate::error::UpdateError;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone)]
pub struct LastfmConfig {
    pub username: String,
    pub api_key: String,
    /// How many recent tracks to request; only the first one is used.
    pub limit: u32,
    pub endpoint: Url,
}

#[derive(Debug, Clone)]
pub struct TraktConfig {
    pub username: String,
    pub api_key: String,
    pub endpoint: Url,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub lastfm: LastfmConfig,
    pub trakt: TraktConfig,
    /// Merged stats JSON, accumulated across runs.
    pub output_file: PathBuf,
    /// SVG card rendered from the Trakt stats.
    pub badge_file: PathBuf,
}

impl Config {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lastfm_user: Option<String>,
        lastfm_api_key: Option<String>,
        lastfm_limit: u32,
        lastfm_endpoint: Url,
        trakt_user: Option<String>,
        trakt_api_key: Option<String>,
        trakt_endpoint: Url,
        output_file: PathBuf,
        badge_file: PathBuf,
    ) -> Result<Self, UpdateError> {
        let lastfm = LastfmConfig {
            username: lastfm_user.ok_or(UpdateError::MissingCredential("LASTFM_USERNAME"))?,
            api_key: lastfm_api_key.ok_or(UpdateError::MissingCredential("LASTFM_API_KEY"))?,
            limit: lastfm_limit,
            endpoint: lastfm_endpoint,
        };
        let trakt = TraktConfig {
            username: trakt_user.ok_or(UpdateError::MissingCredential("TRAKT_USERNAME"))?,
            api_key: trakt_api_key.ok_or(UpdateError::MissingCredential("TRAKT_API_KEY"))?,
            endpoint: trakt_endpoint,
        };

        Ok(Self {
            lastfm,
            trakt,
            output_file,
            badge_file,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn build(lastfm_key: Option<&str>, trakt_key: Option<&str>) -> Result<Config, UpdateError> {
        Config::new(
            Some("user".into()),
            lastfm_key.map(Into::into),
            1,
            Url::parse("http://ws.audioscrobbler.com/2.0/").unwrap(),
            Some("user".into()),
            trakt_key.map(Into::into),
            Url::parse("https://api.trakt.tv").unwrap(),
            PathBuf::from("assets/stats.json"),
            PathBuf::from("assets/trakt_card.svg"),
        )
    }

    #[test]
    fn complete_credentials_build_a_config() {
        let config = build(Some("a"), Some("b")).unwrap();
        assert_eq!(config.lastfm.username, "user");
        assert_eq!(config.trakt.api_key, "b");
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let err = build(None, Some("b")).unwrap_err();
        assert!(matches!(err, UpdateError::MissingCredential("LASTFM_API_KEY")));

        let err = build(Some("a"), None).unwrap_err();
        assert!(matches!(err, UpdateError::MissingCredential("TRAKT_API_KEY")));
    }
}
