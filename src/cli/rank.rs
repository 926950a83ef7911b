use tabled::Table;

use crate::{
    cli::{connect, spinner},
    engine, info,
    types::TrackTableRow,
    utils, warning,
};

/// Prints the playlist's tracks ordered by popularity.
pub async fn rank(playlist: String, count: String) {
    let playlist_id = match utils::parse_playlist_id(&playlist) {
        Ok(id) => id,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    let count = match utils::parse_track_count(&count) {
        Ok(count) => count,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    let client = connect().await;

    let pb = spinner(format!("Fetching tracks of playlist {}...", playlist_id));
    let tracks = engine::fetch_all_tracks(&client, &playlist_id).await;
    pb.finish_and_clear();

    let tracks = match tracks {
        Ok(tracks) => tracks,
        Err(e) => {
            warning!("Cannot read playlist {}: {}", playlist_id, e);
            return;
        }
    };

    if tracks.is_empty() {
        info!("Playlist {} has no tracks.", playlist_id);
        return;
    }

    let ranked = engine::rank(&tracks, count);
    let rows: Vec<TrackTableRow> = ranked
        .into_iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            position: i + 1,
            name: t.name,
            artist: t.artist,
            popularity: t.popularity,
        })
        .collect();

    info!("Top {} of {} tracks by popularity", rows.len(), tracks.len());
    println!("{}", Table::new(rows));
}
