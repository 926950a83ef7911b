//! # Engine Module
//!
//! The playlist logic of spotlist, independent of how parameters are
//! collected and of the HTTP details behind the collaborator traits.
//!
//! ```text
//! tracks   ── drains TrackSource pages into one Vec<TrackRecord>
//!   ├── ranking  ── popularity sort + truncate
//!   ├── mixer    ── sequential / interleaved merge of URI lanes
//!   └── novelty  ── recently added tracks not yet in the histories
//!          └── target ── find or create "{GENRE} {year}"
//! mutator  ── 100-URI batches of replace / add, ownership guard,
//!             ranked rewrite for sort / top
//! genres   ── playlists.txt → ordered genre mapping
//! ```
//!
//! Every operation runs as one sequence of awaited calls; nothing is spawned.

pub mod genres;
pub mod mixer;
pub mod mutator;
pub mod novelty;
pub mod ranking;
pub mod target;
pub mod tracks;

pub use genres::parse_genre_mapping;
pub use mixer::mix;
pub use mutator::{append, ensure_owned, replace, rewrite_ranked};
pub use novelty::{GenreReport, GenreSummary, NoveltyScanner, run_update};
pub use ranking::rank;
pub use target::resolve_target_playlist;
pub use tracks::fetch_all_tracks;
