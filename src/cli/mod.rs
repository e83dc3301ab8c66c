//! # CLI Module
//!
//! The command layer of `spotex`. Each command loads what it needs
//! (token, configuration), calls into the library modules, reports progress
//! with spinners and prints the outcome with the crate's output macros.
//! Unrecoverable failures end the process through `error!`.
//!
//! ## Commands
//!
//! - [`auth`] - authorize `spotex` with Spotify (OAuth 2.0 PKCE)
//! - [`export`] - gather playlists, extract records, write the CSV and
//!   optionally download previews
//! - [`categories`] - list browse categories usable with `export --category`
//! - [`convert`] - convert downloaded MP3 previews to WAV
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotex auth
//! spotex export --genre pop --genre jazz --limit 10
//! spotex export --genre classical --download --format wav --audio-dir ./audio
//! spotex export --playlist 37i9dQZF1DWZQaaqNMbbXa --label focus --output focus.csv
//! spotex categories
//! spotex convert --from ./data --to ./wav
//! ```

mod auth;
mod categories;
mod convert;
mod export;

pub use auth::auth;
pub use categories::categories;
pub use convert::convert;
pub use export::{ExportRequest, export};
