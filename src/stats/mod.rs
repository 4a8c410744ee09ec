//! Typed projections of the raw provider snapshots.
//!
//! Each provider response is decoded into a small struct here and flattened
//! into a [`DerivedStats`] mapping, which is what the diff/merge step and the
//! persisted file operate on.

pub mod now_playing;
pub mod watch_stats;

pub use now_playing::NowPlaying;
pub use watch_stats::WatchStats;

/// Named fields computed from one provider snapshot.
pub type DerivedStats = serde_json::Map<String, serde_json::Value>;

/// Whole-number rounding, `round(minutes / 60)`.
pub(crate) fn whole_hours(minutes: u64) -> u64 {
    (minutes as f64 / 60.0).round() as u64
}

/// Whole-number rounding, `round(minutes / 1440)`.
pub(crate) fn whole_days(minutes: u64) -> u64 {
    (minutes as f64 / 1440.0).round() as u64
}
