use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    Res,
    error::Error,
    types::{PlaylistId, TrackCount},
};

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

/// Extracts a playlist id from a share URL, a `spotify:playlist:` URI or a bare id.
///
/// ```
/// let id = parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc")?;
/// assert_eq!(id.as_str(), "37i9dQZF1DXcBWIGoYBM5M");
/// ```
pub fn parse_playlist_id(input: &str) -> Res<PlaylistId> {
    let input = input.trim();

    let candidate = if let Some((_, rest)) = input.split_once("playlist/") {
        rest.split(['?', '#']).next().unwrap_or_default().trim_end_matches('/')
    } else if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        rest
    } else {
        input
    };

    // also rejects other `spotify:` URIs such as tracks or albums
    if candidate.is_empty()
        || candidate.contains(['/', ':'])
        || candidate.contains(char::is_whitespace)
    {
        return Err(Error::InvalidInput(format!(
            "'{}' is not a playlist URL or id",
            input
        )));
    }

    Ok(PlaylistId::new(candidate.to_string()))
}

/// Normalizes a genre label: `&` becomes `AND`, `_` becomes a space, all uppercase.
pub fn normalize_genre(label: &str) -> String {
    label.replace('&', "AND").replace('_', " ").to_uppercase()
}

/// File name of the cover image for a normalized genre label.
pub fn cover_image_name(genre: &str) -> String {
    format!("{}.jpg", genre.to_lowercase().replace(' ', "_"))
}

/// Parses `"all"` or a positive integer.
pub fn parse_track_count(input: &str) -> Res<TrackCount> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return Ok(TrackCount::All);
    }

    match input.parse::<i64>() {
        Ok(n) if n > 0 => Ok(TrackCount::Top(n as usize)),
        Ok(n) => Err(Error::InvalidInput(format!(
            "track count must be greater than 0, got {}",
            n
        ))),
        Err(_) => Err(Error::InvalidInput(format!(
            "track count must be a number or 'all', got '{}'",
            input
        ))),
    }
}

/// Last `:`-separated segment of a `spotify:track:<id>` URI.
pub fn track_id_from_uri(uri: &str) -> &str {
    uri.rsplit(':').next().unwrap_or(uri)
}

pub fn parse_added_at(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn remove_duplicate_uris(uris: &mut Vec<String>) {
    let mut seen = HashSet::new();
    uris.retain(|uri| seen.insert(uri.clone()));
}
