use crate::{
    error::UpdateError,
    stats::{
        whole_days,
        whole_hours,
        DerivedStats,
    },
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

/// The slice of the Trakt.tv `/users/{user}/stats` response we care about.
#[derive(Debug, Deserialize)]
struct RawStats {
    movies: RawCategory,
    shows: RawShows,
    episodes: RawCategory,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    minutes: u64,
    watched: u64,
}

#[derive(Debug, Deserialize)]
struct RawShows {
    watched: u64,
}

/// Watch-time statistics derived from a Trakt.tv snapshot.
///
/// Show time is tracked per episode on Trakt, so `show_days`/`show_hours`
/// come from the `episodes` category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchStats {
    pub movie_days: u64,
    pub movie_hours: u64,
    pub movies_watched: u64,
    pub show_days: u64,
    pub show_hours: u64,
    pub shows_watched: u64,
    pub episodes_watched: u64,
}

impl WatchStats {
    pub fn from_snapshot(snapshot: &Value) -> Result<Self, UpdateError> {
        let raw: RawStats = serde_json::from_value(snapshot.clone()).map_err(|e| UpdateError::Parse {
            provider: "trakt.tv",
            reason: e.to_string(),
        })?;

        Ok(Self {
            movie_days: whole_days(raw.movies.minutes),
            movie_hours: whole_hours(raw.movies.minutes),
            movies_watched: raw.movies.watched,
            show_days: whole_days(raw.episodes.minutes),
            show_hours: whole_hours(raw.episodes.minutes),
            shows_watched: raw.shows.watched,
            episodes_watched: raw.episodes.watched,
        })
    }

    /// Flatten into the named fields that end up in the persisted file.
    pub fn fields(&self) -> DerivedStats {
        let mut fields = DerivedStats::new();
        fields.insert("movie_days".into(), self.movie_days.into());
        fields.insert("movie_hours".into(), self.movie_hours.into());
        fields.insert("movies_watched".into(), self.movies_watched.into());
        fields.insert("show_days".into(), self.show_days.into());
        fields.insert("show_hours".into(), self.show_hours.into());
        fields.insert("shows_watched".into(), self.shows_watched.into());
        fields.insert("episodes_watched".into(), self.episodes_watched.into());
        fields
    }
}
