//! # API Module
//!
//! HTTP endpoints of the short-lived local server that `spotex auth` starts.
//!
//! - [`callback`] - receives the authorization code from Spotify and
//!   exchanges it for a token using the stored PKCE verifier
//! - [`health`] - reports status and version, handy for checking that the
//!   redirect URI points at the right port
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotex::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
