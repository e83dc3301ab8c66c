//! Configuration management for the Spotify playlist exporter.
//!
//! Configuration values come from environment variables and an optional `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Only the Spotify client id has no default; everything else falls back to the
//! public Spotify endpoints and `./data` / `data.csv` in the working directory.

use std::{env, path::PathBuf};

use crate::Res;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
const DEFAULT_SCOPE: &str = "user-library-read user-top-read playlist-modify-public";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_MARKET: &str = "US";
const DEFAULT_LOCALE: &str = "en_US";
const DEFAULT_AUDIO_DIR: &str = "./data";
const DEFAULT_EXPORT_FILE: &str = "data.csv";

/// Returns the application directory inside the platform's local data directory.
///
/// - Linux: `~/.local/share/spotex`
/// - macOS: `~/Library/Application Support/spotex`
/// - Windows: `%LOCALAPPDATA%/spotex`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotex");
    path
}

/// Loads environment variables from `<data_dir>/.env`.
///
/// Creates the data directory if it doesn't exist. A missing `.env` file is
/// not an error: every value can also be supplied through the process
/// environment.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the `.env` file
/// exists but cannot be parsed.
pub async fn load_env() -> Res<()> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Client id of the registered Spotify application (`SPOTIFY_API_AUTH_CLIENT_ID`).
///
/// # Errors
///
/// Fails when the variable is unset or empty; there is no sensible default.
pub fn spotify_client_id() -> Res<String> {
    match env::var("SPOTIFY_API_AUTH_CLIENT_ID") {
        Ok(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(format!(
            "SPOTIFY_API_AUTH_CLIENT_ID must be set (see {})",
            data_dir().join(".env.example").display()
        )
        .into()),
    }
}

/// OAuth redirect URI registered with Spotify (`SPOTIFY_API_REDIRECT_URI`).
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Space separated OAuth scopes (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Spotify OAuth authorization endpoint (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Spotify Web API base URL without trailing slash (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Spotify OAuth token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Market used for search and playlist lookups (`SPOTEX_MARKET`).
pub fn market() -> String {
    var_or("SPOTEX_MARKET", DEFAULT_MARKET)
}

/// Locale used when listing browse categories (`SPOTEX_LOCALE`).
pub fn locale() -> String {
    var_or("SPOTEX_LOCALE", DEFAULT_LOCALE)
}

/// Directory downloaded previews are written to (`SPOTEX_AUDIO_DIR`).
pub fn audio_dir() -> PathBuf {
    PathBuf::from(var_or("SPOTEX_AUDIO_DIR", DEFAULT_AUDIO_DIR))
}

/// CSV file the export command writes (`SPOTEX_EXPORT_FILE`).
pub fn export_file() -> PathBuf {
    PathBuf::from(var_or("SPOTEX_EXPORT_FILE", DEFAULT_EXPORT_FILE))
}
