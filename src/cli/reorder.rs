use crate::{
    cli::{connect, spinner},
    engine, success,
    types::TrackCount,
    utils, warning,
};

/// Reorders one of your playlists by popularity, most popular first.
pub async fn sort(playlist: String) {
    let playlist_id = match utils::parse_playlist_id(&playlist) {
        Ok(id) => id,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    let client = connect().await;

    let pb = spinner(format!("Sorting playlist {}...", playlist_id));
    let result = engine::rewrite_ranked(&client, &playlist_id, TrackCount::All).await;
    pb.finish_and_clear();

    match result {
        Ok(count) => success!("Playlist {} sorted, {} tracks.", playlist_id, count),
        Err(e) => warning!("{}", e),
    }
}

/// Keeps only the `count` most popular tracks of one of your playlists.
pub async fn top(playlist: String, count: String) {
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

    let pb = spinner(format!("Ranking playlist {}...", playlist_id));
    let result = engine::rewrite_ranked(&client, &playlist_id, count).await;
    pb.finish_and_clear();

    match result {
        Ok(kept) => success!("Playlist {} reduced to {} tracks.", playlist_id, kept),
        Err(e) => warning!("{}", e),
    }
}
