use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

/// Genre tags reported by Spotify for one artist.
pub type GenreSet = Vec<String>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Raw body of the `/api/token` endpoint.
///
/// `refresh_token` is omitted by Spotify when a refresh does not rotate it.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Reads a string that Spotify may send as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Classification attached to a playlist before extraction, usually the
/// search term or browse category the playlist was found through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::new(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Page {
            items: Vec::new(),
            next: None,
            total: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub tracks: Page<Option<TrackEntry>>,
}

impl PlaylistResponse {
    /// Tracks of the playlist in the order Spotify returned them.
    ///
    /// Entries that are `null`, or whose track is `null` (removed or
    /// unavailable tracks), are passed over.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> + '_ {
        self.tracks
            .items
            .iter()
            .filter_map(|entry| entry.as_ref()?.track.as_ref())
    }

    pub fn entry_count(&self) -> usize {
        self.tracks.items.len()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackEntry {
    #[serde(default)]
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl Track {
    pub fn first_artist(&self) -> Option<&ArtistRef> {
        self.artists.first()
    }
}

/// Simplified artist object embedded in a track.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Full artist object from `/artists/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub genres: GenreSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub uri: String,
}

/// Body of `/search?type=playlist` and `/browse/categories/{id}/playlists`.
///
/// Spotify returns `null` in place of playlists it no longer serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsResponse {
    pub playlists: Page<Option<PlaylistSummary>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Page<Category>,
}

/// File format downloaded previews are stored in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AudioFormat {
    /// Store the preview as delivered by Spotify
    #[default]
    Mp3,
    /// Decode the preview and store it as 16-bit PCM WAV
    Wav,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Tabled)]
pub struct CategoryTableRow {
    pub id: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct LabelSummaryRow {
    pub label: String,
    pub playlists: usize,
    pub records: usize,
}
