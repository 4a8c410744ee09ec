use crate::{
    error::UpdateError,
    stats::DerivedStats,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RecentTracksResponse {
    recenttracks: RecentTracks,
}

#[derive(Debug, Deserialize)]
struct RecentTracks {
    track: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct Track {
    name: String,
    artist: Artist,
}

/// Last.fm nests the artist name under the XML-ish `#text` key.
#[derive(Debug, Deserialize)]
struct Artist {
    #[serde(rename = "#text")]
    name: String,
}

/// The most recently scrobbled song, from a Last.fm `user.getrecenttracks`
/// snapshot. Only the first track of the response is considered, whatever
/// the configured limit was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub artist: String,
    pub title: String,
}

impl NowPlaying {
    pub fn from_snapshot(snapshot: &Value) -> Result<Self, UpdateError> {
        let raw: RecentTracksResponse = serde_json::from_value(snapshot.clone()).map_err(|e| UpdateError::Parse {
            provider: "last.fm",
            reason: e.to_string(),
        })?;

        let track = raw.recenttracks.track.into_iter().next().ok_or(UpdateError::Parse {
            provider: "last.fm",
            reason: "no recent tracks in response".into(),
        })?;

        Ok(Self {
            artist: track.artist.name,
            title: track.name,
        })
    }

    pub fn song(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }

    pub fn fields(&self) -> DerivedStats {
        let mut fields = DerivedStats::new();
        fields.insert("song".into(), self.song().into());
        fields
    }
}
