//! # Profile Stats Gatherer
//!
//! Polls Last.fm and Trakt.tv, derives a handful of display-friendly fields,
//! and keeps a local JSON file (plus an SVG card) up to date for use in a
//! badge or profile page.
//!
//! ## Architecture
//!
//! - **`config`**: explicit run configuration built from env-backed CLI args
//! - **`providers`**: the `Provider` trait plus the Last.fm and Trakt.tv
//!   implementations (request building and snapshot derivation)
//! - **`stats`**: typed derived-stats structs and rounding helpers
//! - **`state`**: the persisted JSON record (tolerant load, diff, merge, save)
//! - **`badge`**: 600×400 SVG card templating
//! - **`updater`**: the linear fetch → derive → diff → persist pipeline
//!
//! The pipeline writes at most one stats file and one badge per provider per
//! run, and skips the write entirely when nothing changed, so a scheduled
//! job only dirties the working tree when there is something new to show.
//!
//! ## Usage
//!
//! ```bash
//! LASTFM_USERNAME=someone LASTFM_API_KEY=... \
//! TRAKT_USERNAME=someone TRAKT_API_KEY=... \
//! profile-stats-gatherer --output-file=assets/stats.json
//! ```

pub mod badge;
pub mod config;
pub mod error;
pub mod providers;
pub mod state;
pub mod stats;
pub mod updater;

pub use config::Config;
pub use error::UpdateError;
pub use providers::Provider;
pub use state::PersistedState;
pub use updater::{
    StatsUpdater,
    UpdateOutcome,
};
