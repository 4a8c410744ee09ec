//! Per-provider fetch and derivation logic.
//!
//! - **`Provider` trait**: the interface one remote stats source implements
//! - **`LastfmProvider`**: most recently scrobbled song from Last.fm
//! - **`TraktProvider`**: watch-time statistics from Trakt.tv
//!
//! A provider only knows how to build its single GET request and how to
//! project the decoded response into [`DerivedStats`](crate::stats::DerivedStats);
//! the surrounding pipeline (HTTP, diff, persistence) lives in
//! [`updater`](crate::updater).

pub mod lastfm;
pub mod provider;
pub mod trakt;

pub use lastfm::LastfmProvider;
pub use provider::Provider;
pub use trakt::TraktProvider;
