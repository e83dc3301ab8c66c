//! # Playlist Extraction
//!
//! Turns Spotify playlists into flat records ready for tabular export.
//!
//! ## Flow
//!
//! ```text
//! PlaylistSource (search term, category, explicit id)
//!          ↓  sources::load_playlists
//! (PlaylistResponse, Label) pairs
//!          ↓  PlaylistRecordExtractor::extract
//! ExtractedRecords
//!          ↓  export::write_records
//! CSV file (+ preview files when downloading)
//! ```
//!
//! ## Record shapes
//!
//! With audio download enabled, one [`TrackRecord`] is produced per usable
//! track. Without it, one [`PlaylistRecord`] is produced per playlist,
//! carrying a `"song artist genres"` line for every usable track.
//!
//! ## Skipping rules
//!
//! Missing data never fails an extraction:
//! - `null` track entries and `null` tracks are passed over
//! - tracks with an empty song name or without a named first artist are passed over
//! - a missing preview URL still yields a record, without a preview path
//! - a preview that cannot be fetched, comes back empty, or cannot be
//!   transcoded is reported with `warning!` and its record is dropped
//!
//! Artist lookups and local file writes are not retried; their failures
//! abort the whole pass through [`ExtractError`].

mod extractor;
mod records;
mod sources;

use std::path::PathBuf;

use thiserror::Error;

pub use extractor::PlaylistRecordExtractor;
pub use records::{ExtractedRecords, PlaylistRecord, TrackRecord};
pub use sources::{PlaylistSource, load_playlists};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Artist lookup failed for {artist_id}: {source}")]
    ArtistLookup {
        artist_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
