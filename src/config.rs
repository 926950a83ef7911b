//! Configuration management for spotlist.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files, and computes where the playlist configuration,
//! history files, cover images and the token cache live.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

use crate::{Res, error::Error};

const DEFAULT_SCOPE: &str = "playlist-read-private playlist-modify-private playlist-modify-public ugc-image-upload user-library-read";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from the `.env` file in the data directory.
///
/// Creates the data directory if it doesn't exist. A missing `.env` file is
/// not an error: every value can also come from the process environment.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Res<()> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(e.to_string()))?;
    }
    Ok(())
}

/// Root directory for every file spotlist reads or writes.
///
/// `SPOTLIST_DATA_DIR` wins when set (containers mount `/data` there),
/// otherwise the platform's local data directory:
/// - Linux: `~/.local/share/spotlist`
/// - macOS: `~/Library/Application Support/spotlist`
/// - Windows: `%LOCALAPPDATA%/spotlist`
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("SPOTLIST_DATA_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlist");
    path
}

/// Default location of the `<playlist> <genre>` source list.
pub fn playlists_file() -> PathBuf {
    data_dir().join("playlists.txt")
}

pub fn images_dir() -> PathBuf {
    data_dir().join("images")
}

pub fn token_path() -> PathBuf {
    data_dir().join("cache").join("token.json")
}

fn required(key: &str) -> Res<String> {
    env::var(key).map_err(|_| Error::Config(format!("{} must be set", key)))
}

fn optional(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Address the local OAuth callback server binds to, e.g. `127.0.0.1:8888`.
pub fn server_addr() -> Res<String> {
    required("SERVER_ADDRESS")
}

/// Client id of the application registered with Spotify.
pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Callback URL registered with Spotify, e.g. `http://127.0.0.1:8888/callback`.
pub fn spotify_redirect_uri() -> Res<String> {
    required("SPOTIFY_API_REDIRECT_URI")
}

pub fn spotify_scope() -> String {
    optional("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    optional("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
}

pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}
