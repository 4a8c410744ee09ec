use crate::{
    error::UpdateError,
    stats::DerivedStats,
};
use reqwest::{
    Client,
    RequestBuilder,
};
use serde_json::Value;

/// One remote statistics source.
pub trait Provider {
    /// Short name used in log lines and error messages.
    fn name(&self) -> &'static str;

    /// Build the single GET request for this provider.
    fn request(&self, client: &Client) -> RequestBuilder;

    /// Project a decoded response body into named stats fields.
    fn derive(&self, snapshot: &Value) -> Result<DerivedStats, UpdateError>;

    /// Render an SVG card from the derived stats, if this provider has one.
    fn badge(&self, stats: &DerivedStats) -> Option<String> {
        let _ = stats;
        None
    }
}
