//! CSV export of extracted records.
//!
//! Each call writes one complete file: an existing file is truncated, never
//! appended to, and the header row is present even when there are no records.

use std::path::Path;

use serde::Serialize;

use crate::{
    Res,
    extract::{ExtractedRecords, PlaylistRecord},
};

pub const TRACK_HEADERS: [&str; 5] = [
    "track_name",
    "preview",
    "artist_name",
    "artist_genre",
    "genre",
];

pub const PLAYLIST_HEADERS: [&str; 4] = ["playlist_id", "tracks", "artist_genre", "genre"];

/// CSV shape of a [`PlaylistRecord`]; the track lines become a JSON array.
#[derive(Serialize)]
struct PlaylistRow<'a> {
    playlist_id: &'a str,
    tracks: String,
    artist_genre: &'a str,
    genre: &'a str,
}

impl<'a> PlaylistRow<'a> {
    fn from_record(record: &'a PlaylistRecord) -> Res<Self> {
        Ok(PlaylistRow {
            playlist_id: &record.playlist_id,
            tracks: serde_json::to_string(&record.tracks)?,
            artist_genre: &record.artist_genre,
            genre: record.label.as_str(),
        })
    }
}

/// Writes `records` to `path` and returns the number of data rows written.
pub fn write_records(path: &Path, records: &ExtractedRecords) -> Res<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    match records {
        ExtractedRecords::Tracks(tracks) => {
            writer.write_record(TRACK_HEADERS)?;
            for record in tracks {
                writer.serialize(record)?;
            }
        }
        ExtractedRecords::Playlists(playlists) => {
            writer.write_record(PLAYLIST_HEADERS)?;
            for record in playlists {
                writer.serialize(PlaylistRow::from_record(record)?)?;
            }
        }
    }

    writer.flush()?;
    Ok(records.len())
}
