use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

/// Characters that are not allowed in file names on common filesystems.
const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Upper bound in bytes for a sanitized stem. Leaves room for an extension
/// under the common 255-byte file name limit.
pub const MAX_FILENAME_STEM_BYTES: usize = 200;

/// Strips characters that are illegal in file names.
///
/// `AC/DC: Back?` becomes `ACDC Back`. Control characters are removed too,
/// and the result is cut to [`MAX_FILENAME_STEM_BYTES`] on a char boundary.
/// A name made up only of illegal characters falls back to `track` so the
/// result is always usable as a path component.
pub fn sanitize_filename(name: &str) -> String {
    let mut stem = String::new();
    for c in name
        .chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c) && !c.is_control())
    {
        if stem.len() + c.len_utf8() > MAX_FILENAME_STEM_BYTES {
            break;
        }
        stem.push(c);
    }

    if stem.trim().is_empty() {
        "track".to_string()
    } else {
        stem
    }
}

pub fn join_genres(genres: &[String]) -> String {
    genres.join(" ")
}

/// Builds the `"song artist genres"` line used by playlist-level records.
pub fn combined_line(song: &str, artist: &str, genres: &str) -> String {
    [song, artist, genres]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts a playlist id from a bare id, a `spotify:playlist:` URI or an
/// `open.spotify.com/playlist/` URL.
pub fn parse_playlist_id(input: &str) -> Result<String, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("playlist id cannot be empty".to_string());
    }

    let id = if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        rest
    } else if let Some(pos) = input.find("/playlist/") {
        let rest = &input[pos + "/playlist/".len()..];
        rest.split(['?', '#', '/']).next().unwrap_or_default()
    } else {
        input
    };

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("invalid playlist id '{}'", input));
    }

    Ok(id.to_string())
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

pub fn progress_bar(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_message(message.into());
    if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:30.blue}] {pos}/{len}") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}
