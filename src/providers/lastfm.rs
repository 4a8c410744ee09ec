use crate::{
    config::LastfmConfig,
    error::UpdateError,
    providers::Provider,
    stats::{
        DerivedStats,
        NowPlaying,
    },
};
use reqwest::{
    Client,
    RequestBuilder,
};
use serde_json::Value;

/// Fetches the most recently played song from the Last.fm scrobbler.
pub struct LastfmProvider {
    config: LastfmConfig,
}

impl LastfmProvider {
    pub fn new(config: LastfmConfig) -> Self {
        Self { config }
    }
}

impl Provider for LastfmProvider {
    fn name(&self) -> &'static str {
        "last.fm"
    }

    fn request(&self, client: &Client) -> RequestBuilder {
        client.get(self.config.endpoint.clone()).query(&[
            ("method", "user.getrecenttracks"),
            ("user", &self.config.username),
            ("api_key", &self.config.api_key),
            ("limit", &self.config.limit.to_string()),
            ("format", "json"),
        ])
    }

    fn derive(&self, snapshot: &Value) -> Result<DerivedStats, UpdateError> {
        Ok(NowPlaying::from_snapshot(snapshot)?.fields())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use url::Url;

    fn provider() -> LastfmProvider {
        LastfmProvider::new(LastfmConfig {
            username: "someone".into(),
            api_key: "secret".into(),
            limit: 1,
            endpoint: Url::parse("http://ws.audioscrobbler.com/2.0/").unwrap(),
        })
    }

    #[test]
    fn request_carries_the_scrobbler_query() {
        let request = provider().request(&Client::new()).build().unwrap();
        let url = request.url();

        assert_eq!(url.host_str(), Some("ws.audioscrobbler.com"));
        let query: Vec<(_, _)> = url.query_pairs().collect();
        assert!(query.contains(&("method".into(), "user.getrecenttracks".into())));
        assert!(query.contains(&("user".into(), "someone".into())));
        assert!(query.contains(&("api_key".into(), "secret".into())));
        assert!(query.contains(&("limit".into(), "1".into())));
        assert!(query.contains(&("format".into(), "json".into())));
    }

    #[test]
    fn has_no_badge() {
        let stats = DerivedStats::new();
        assert!(provider().badge(&stats).is_none());
    }
}
