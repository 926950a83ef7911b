//! # CLI Module
//!
//! The user-facing subcommands of spotlist. Each command collects its
//! parameters, builds the Spotify session, calls into [`crate::engine`] and
//! reports the outcome.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth authorization with PKCE
//! - [`rank`] - print a playlist's tracks by popularity
//! - [`mix`] - merge playlists into a new private playlist
//! - [`update`] - add recently added tracks to the genre playlists
//! - [`sort`] - reorder one of your playlists by popularity
//! - [`top`] - keep only the N most popular tracks of one of your playlists
//!
//! ## Error Handling
//!
//! Operation failures are printed with `warning!` and end the command.
//! Missing configuration or a missing token are fatal and exit through
//! `error!` with status 1.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotlist auth
//! spotlist rank https://open.spotify.com/playlist/... --count 20
//! spotlist mix <playlist> <playlist> --mode interleaved
//! spotlist update --days 7
//! spotlist top <playlist> --count 50
//! ```

mod auth;
mod mix;
mod rank;
mod reorder;
mod update;

pub use auth::auth;
pub use mix::mix;
pub use rank::rank;
pub use reorder::sort;
pub use reorder::top;
pub use update::update;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, spotify::SpotifyClient};

/// Builds the session or exits: nothing works without a token.
async fn connect() -> SpotifyClient {
    match SpotifyClient::connect().await {
        Ok(client) => client,
        Err(e) => error!("Cannot connect to Spotify. {}", e),
    }
}

fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
