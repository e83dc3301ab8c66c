//! Collaborator seams between the extraction core and the outside world.
//!
//! The extractor never talks to Spotify or the network directly. It is handed
//! a [`Catalog`] for metadata lookups and a [`PreviewFetcher`] for audio
//! previews. [`crate::spotify`] provides the real implementations; tests
//! provide in-memory fakes.

use async_trait::async_trait;

use crate::{
    Res,
    types::{Category, GenreSet, PlaylistResponse, PlaylistSummary},
};

/// Read access to the music catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Playlists matching a free-text query, at most `limit` of them.
    async fn search_playlists(&self, query: &str, limit: u32) -> Res<Vec<PlaylistSummary>>;

    /// Playlists listed under a browse category.
    async fn category_playlists(&self, category_id: &str, limit: u32)
    -> Res<Vec<PlaylistSummary>>;

    /// Browse categories available in the configured market.
    async fn categories(&self, limit: u32) -> Res<Vec<Category>>;

    /// Full playlist including its first page of tracks.
    async fn playlist(&self, playlist_id: &str) -> Res<PlaylistResponse>;

    /// Genre tags of an artist. May be empty.
    async fn artist_genres(&self, artist_id: &str) -> Res<GenreSet>;
}

/// Downloads preview audio.
#[async_trait]
pub trait PreviewFetcher: Send + Sync {
    /// Returns the payload at `url`, or `None` when the server answered
    /// without content.
    async fn fetch_preview(&self, url: &str) -> Res<Option<Vec<u8>>>;
}
