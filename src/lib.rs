//! Spotify Playlist Exporter Library
//!
//! This library turns Spotify playlists into flat tabular records. It searches
//! playlists by genre term or browse category, walks their tracks, looks up the
//! genres of each track's artist, optionally downloads the track's audio preview
//! and writes everything to a CSV file ready for analysis.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `catalog` - Collaborator traits the extractor depends on
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `convert` - MP3 to WAV conversion
//! - `export` - CSV export of extracted records
//! - `extract` - Playlist-to-record extraction
//! - `management` - Token caching
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotex::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> spotex::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod convert;
pub mod export;
pub mod extract;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with `Send + Sync` bounds so that
/// errors can cross `.await` points and task boundaries. Module-specific error
/// enums such as [`extract::ExtractError`] convert into it with `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching playlists for {}", term);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Exported {} records", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the command layer: the process terminates with exit code 1
/// right after the message is printed.
///
/// # Example
///
/// ```
/// error!("Failed to load token. Please run spotex auth");
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable conditions, for example a preview download that
/// failed and caused a track to be skipped.
///
/// # Example
///
/// ```
/// warning!("Preview for {} could not be fetched, skipping", song);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
