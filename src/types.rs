use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Opaque Spotify playlist identifier.
///
/// Only built through [`crate::utils::parse_playlist_id`], so every value is
/// non-empty and free of URL noise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaylistId(String);

impl PlaylistId {
    pub(crate) fn new(id: String) -> Self {
        PlaylistId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One track of a playlist as fetched from Spotify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub artist: String,
    pub popularity: u8,
    pub added_at: Option<DateTime<Utc>>,
}

/// One page of a playlist's tracks.
#[derive(Debug, Clone, Default)]
pub struct TrackPage {
    pub tracks: Vec<TrackRecord>,
    pub next_offset: Option<u32>,
}

/// How many ranked tracks to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackCount {
    All,
    Top(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MixMode {
    /// One playlist after the other
    Sequential,
    /// Round-robin across playlists
    Interleaved,
}

impl fmt::Display for MixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixMode::Sequential => f.write_str("SEQUENTIAL"),
            MixMode::Interleaved => f.write_str("INTERLEAVED"),
        }
    }
}

/// Source playlists grouped under one normalized genre label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreSources {
    pub genre: String,
    pub sources: Vec<PlaylistId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPlaylist {
    pub id: PlaylistId,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub name: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub popularity: u8,
}

// Spotify Web API payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub offset: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub added_at: Option<String>,
    pub track: Option<ApiTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTrack {
    pub id: Option<String>,
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub artists: Vec<ApiArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwnerResponse {
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsRequest {
    pub uris: Vec<String>,
}
