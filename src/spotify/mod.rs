//! # Spotify Integration Module
//!
//! This module is the only place that talks HTTP to the Spotify Web API. It
//! provides the OAuth 2.0 PKCE flow, the authenticated session object and the
//! two traits through which the rest of the crate reads and edits playlists.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (spotlist subcommands)
//!          ↓
//! Engine (ranking, mixer, novelty scanner, mutator)
//!          ↓  TrackSource / PlaylistEditor
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE, token refresh)
//!     └── SpotifyClient (session: token manager + account id)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Collaborator Traits
//!
//! - [`TrackSource`] - one page of a playlist's tracks at a time; the engine's
//!   track store adapter drains all pages before any processing
//! - [`PlaylistEditor`] - create, replace items, add items, upload a cover,
//!   look up the owner and list the account's playlists
//!
//! Both are implemented by [`SpotifyClient`] and by in-memory fakes in the
//! test suite.
//!
//! ## Rate Limiting
//!
//! The client honours `Retry-After` on `429 Too Many Requests` for waits up to
//! 120 seconds and retries `502 Bad Gateway` after a pause, at most three
//! attempts per request. Every other failure is returned to the caller as
//! [`crate::error::Error::Upstream`].
//!
//! ## API Coverage
//!
//! - `GET /me` - account id of the session
//! - `GET /me/playlists` - the account's playlists (first page only)
//! - `GET /playlists/{id}` - playlist owner
//! - `GET /playlists/{id}/tracks` - paginated playlist items
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `PUT /playlists/{id}/tracks` - replace items
//! - `POST /playlists/{id}/tracks` - add items
//! - `PUT /playlists/{id}/images` - upload a JPEG cover
//! - `POST /api/token` - token exchange and refresh

pub mod auth;
mod client;

pub use client::SpotifyClient;

use crate::{
    Res,
    types::{CreatedPlaylist, PlaylistId, PlaylistSummary, TrackPage},
};

/// Most URIs a single replace or add request accepts.
pub const MAX_URIS_PER_REQUEST: usize = 100;

/// Paginated read access to playlist contents.
#[allow(async_fn_in_trait)]
pub trait TrackSource {
    /// Tracks of `playlist` starting at `offset`, plus the offset of the next
    /// page when there is one.
    async fn track_page(&self, playlist: &PlaylistId, offset: u32) -> Res<TrackPage>;
}

/// Mutations on the authenticated account's playlists.
#[allow(async_fn_in_trait)]
pub trait PlaylistEditor {
    /// Spotify user id of the authenticated account.
    fn account_id(&self) -> &str;

    /// The first `limit` playlists of the account.
    async fn user_playlists(&self, limit: u32) -> Res<Vec<PlaylistSummary>>;

    async fn playlist_owner(&self, playlist: &PlaylistId) -> Res<String>;

    async fn create_playlist(
        &self,
        name: &str,
        public: bool,
        description: &str,
    ) -> Res<CreatedPlaylist>;

    /// Replaces the whole playlist with at most 100 `uris`.
    async fn replace_items(&self, playlist: &PlaylistId, uris: &[String]) -> Res<()>;

    /// Appends at most 100 `uris` to the playlist.
    async fn add_items(&self, playlist: &PlaylistId, uris: &[String]) -> Res<()>;

    async fn upload_cover_image(&self, playlist: &PlaylistId, jpeg_base64: &str) -> Res<()>;
}
