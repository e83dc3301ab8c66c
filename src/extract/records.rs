use std::path::PathBuf;

use serde::Serialize;

use crate::types::Label;

/// One downloaded (or download-less) track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRecord {
    pub track_name: String,
    /// Local path of the stored preview; `None` when the track has no preview URL.
    pub preview: Option<PathBuf>,
    pub artist_name: String,
    pub artist_genre: String,
    #[serde(rename = "genre")]
    pub label: Label,
}

/// Aggregate of one playlist when previews are not downloaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistRecord {
    pub playlist_id: String,
    /// `"song artist genres"` per usable track, in playlist order.
    pub tracks: Vec<String>,
    /// Genres of the last usable track's artist.
    pub artist_genre: String,
    #[serde(rename = "genre")]
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedRecords {
    Tracks(Vec<TrackRecord>),
    Playlists(Vec<PlaylistRecord>),
}

impl ExtractedRecords {
    pub fn len(&self) -> usize {
        match self {
            ExtractedRecords::Tracks(records) => records.len(),
            ExtractedRecords::Playlists(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Labels of all records, in record order.
    pub fn labels(&self) -> Vec<&Label> {
        match self {
            ExtractedRecords::Tracks(records) => records.iter().map(|r| &r.label).collect(),
            ExtractedRecords::Playlists(records) => records.iter().map(|r| &r.label).collect(),
        }
    }
}
