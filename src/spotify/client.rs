use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    Res,
    catalog::Catalog,
    config,
    management::TokenManager,
    types::{
        Artist, CategoriesResponse, Category, GenreSet, PlaylistResponse, PlaylistSummary,
        PlaylistsResponse,
    },
};

/// Only the fields the extractor reads are requested for playlists.
const PLAYLIST_FIELDS: &str = "id,name,tracks(total,next,items(track(name,preview_url,artists(id,name))))";

/// Spotify Web API client used as the extraction [`Catalog`].
///
/// The access token is refreshed transparently through [`TokenManager`]
/// before each request when it is about to expire.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    market: String,
    locale: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(tokens: TokenManager) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url: config::spotify_apiurl(),
            market: config::market(),
            locale: config::locale(),
            tokens: Mutex::new(tokens),
        }
    }

    /// Builds a client from the token cached by `spotex auth`.
    pub async fn from_cache() -> Res<Self> {
        let tokens = TokenManager::load().await?;
        Ok(Self::new(tokens))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Res<T> {
        let token = self.tokens.lock().await.get_valid_token().await;
        let url = format!("{}{}", self.api_url, path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn search_playlists(&self, query: &str, limit: u32) -> Res<Vec<PlaylistSummary>> {
        let res: PlaylistsResponse = self
            .get(
                "/search",
                &[
                    ("q", query.to_string()),
                    ("type", "playlist".to_string()),
                    ("limit", limit.to_string()),
                    ("market", self.market.clone()),
                ],
            )
            .await?;

        Ok(res.playlists.items.into_iter().flatten().collect())
    }

    async fn category_playlists(
        &self,
        category_id: &str,
        limit: u32,
    ) -> Res<Vec<PlaylistSummary>> {
        let res: PlaylistsResponse = self
            .get(
                &format!("/browse/categories/{}/playlists", category_id),
                &[
                    ("country", self.market.clone()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(res.playlists.items.into_iter().flatten().collect())
    }

    async fn categories(&self, limit: u32) -> Res<Vec<Category>> {
        let res: CategoriesResponse = self
            .get(
                "/browse/categories",
                &[
                    ("country", self.market.clone()),
                    ("locale", self.locale.clone()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(res.categories.items)
    }

    async fn playlist(&self, playlist_id: &str) -> Res<PlaylistResponse> {
        self.get(
            &format!("/playlists/{}", playlist_id),
            &[
                ("market", self.market.clone()),
                ("fields", PLAYLIST_FIELDS.to_string()),
            ],
        )
        .await
    }

    async fn artist_genres(&self, artist_id: &str) -> Res<GenreSet> {
        let artist: Artist = self.get(&format!("/artists/{}", artist_id), &[]).await?;
        Ok(artist.genres)
    }
}
