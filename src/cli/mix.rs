use chrono::Local;

use crate::{
    Res,
    cli::{connect, spinner},
    engine,
    error::Error,
    info,
    spotify::{PlaylistEditor, SpotifyClient},
    success,
    types::{MixMode, PlaylistId},
    utils, warning,
};

const MIX_DESCRIPTION: &str = "Created with spotlist";

/// Merges the given playlists into a new private playlist.
pub async fn mix(playlists: Vec<String>, mode: MixMode, name: Option<String>) {
    let ids: Vec<PlaylistId> = match playlists
        .iter()
        .map(|p| utils::parse_playlist_id(p))
        .collect::<Res<Vec<_>>>()
    {
        Ok(ids) => ids,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    if ids.len() < 2 {
        warning!("{}", Error::InsufficientSources(ids.len()));
        return;
    }

    let client = connect().await;

    let uris = match mixed_uris(&client, &ids, mode).await {
        Ok(uris) => uris,
        Err(e) => {
            warning!("{}", e);
            return;
        }
    };

    info!("{} unique tracks in {} mode", uris.len(), mode);

    let name = name
        .unwrap_or_else(|| format!("Mix {} - {}", mode, Local::now().format("%Y-%m-%d %H:%M")));

    let playlist = match client.create_playlist(&name, false, MIX_DESCRIPTION).await {
        Ok(playlist) => playlist,
        Err(e) => {
            warning!("Failed to create playlist: {}", e);
            return;
        }
    };

    match engine::append(&client, &playlist.id, &uris).await {
        Ok(added) => success!(
            "Playlist '{}' created with {} tracks: {}",
            name,
            added,
            playlist.url
        ),
        Err(e) => warning!("Playlist '{}' ({}) is incomplete. {}", name, playlist.url, e),
    }
}

/// Fetches one lane per playlist. Unreadable playlists are skipped, the mixer
/// rejects the result when fewer than two lanes have tracks.
async fn mixed_uris(
    client: &SpotifyClient,
    ids: &[PlaylistId],
    mode: MixMode,
) -> Res<Vec<String>> {
    let mut lanes = Vec::with_capacity(ids.len());

    for id in ids {
        let pb = spinner(format!("Fetching tracks of playlist {}...", id));
        let tracks = engine::fetch_all_tracks(client, id).await;
        pb.finish_and_clear();

        match tracks {
            Ok(tracks) => lanes.push(engine::tracks::track_uris(&tracks)),
            Err(e) => warning!("Skipping playlist {}: {}", id, e),
        }
    }

    engine::mix(&lanes, mode)
}

