//! # Spotify Integration Module
//!
//! HTTP integration with the Spotify Web API and the Spotify accounts service.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, extraction)
//!          ↓            ↓
//!      Catalog     PreviewFetcher      (crate::catalog)
//!          ↓            ↓
//!   SpotifyClient  HttpPreviewFetcher
//!          ↓            ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API / preview CDN
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier and challenge generation,
//!   browser launch, local callback server, code exchange and token refresh
//! - [`client`] - [`SpotifyClient`], the [`crate::catalog::Catalog`]
//!   implementation backed by the Web API
//! - [`preview`] - [`HttpPreviewFetcher`], downloads preview clips
//!
//! ## API Coverage
//!
//! - `GET /search?type=playlist` - playlists matching a search term
//! - `GET /browse/categories` - browse categories
//! - `GET /browse/categories/{id}/playlists` - playlists of a category
//! - `GET /playlists/{id}` - playlist with its first page of tracks
//! - `GET /artists/{id}` - artist genres
//! - `POST /api/token` - token exchange and refresh
//!
//! ## Error Handling
//!
//! Requests are sent once. Non-success statuses are turned into errors with
//! `error_for_status` and handed to the caller, which decides whether the
//! failure aborts the run or only skips one track.

pub mod auth;
pub mod client;
pub mod preview;

pub use client::SpotifyClient;
pub use preview::HttpPreviewFetcher;
