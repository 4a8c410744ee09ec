//! The 600×400 SVG profile card rendered from the Trakt.tv stats.
//!
//! Plain string templating; the card has fixed dimensions and a fixed set of
//! text slots, so nothing fancier than `format!` is warranted.

use crate::stats::DerivedStats;
use serde_json::Value;

pub const CARD_WIDTH: u32 = 600;
pub const CARD_HEIGHT: u32 = 400;

/// Render the watch-stats card. Missing fields render as `0` so a partial
/// state still produces a well-formed document.
pub fn watch_card(stats: &DerivedStats) -> String {
    let movies_watched = text(stats, "movies_watched");
    let movie_days = text(stats, "movie_days");
    let shows_watched = text(stats, "shows_watched");
    let show_days = text(stats, "show_days");
    let episodes_watched = text(stats, "episodes_watched");

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" viewBox="0 0 {CARD_WIDTH} {CARD_HEIGHT}">
  <rect width="{CARD_WIDTH}" height="{CARD_HEIGHT}" rx="12" fill="#0d1117"/>
  <text x="30" y="58" font-family="Segoe UI, Ubuntu, sans-serif" font-size="28" font-weight="bold" fill="#ed1c24">Trakt.tv Watch Stats</text>
  <text x="30" y="130" font-family="Segoe UI, Ubuntu, sans-serif" font-size="22" fill="#c9d1d9">Movies watched: {movies_watched} ({movie_days} days)</text>
  <text x="30" y="180" font-family="Segoe UI, Ubuntu, sans-serif" font-size="22" fill="#c9d1d9">Shows watched: {shows_watched}</text>
  <text x="30" y="230" font-family="Segoe UI, Ubuntu, sans-serif" font-size="22" fill="#c9d1d9">Episodes watched: {episodes_watched}</text>
  <text x="30" y="280" font-family="Segoe UI, Ubuntu, sans-serif" font-size="22" fill="#c9d1d9">Show time: {show_days} days</text>
  <text x="30" y="360" font-family="Segoe UI, Ubuntu, sans-serif" font-size="16" fill="#8b949e">updated by profile-stats-gatherer</text>
</svg>
"##
    )
}

/// One interpolated text slot, XML-escaped.
fn text(stats: &DerivedStats, key: &str) -> String {
    let raw = match stats.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
        None => "0".into(),
    };
    xml_escape(&raw)
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
