use crate::{
    Res,
    engine::{ranking, tracks},
    error::Error,
    spotify::{MAX_URIS_PER_REQUEST, PlaylistEditor, TrackSource},
    types::{PlaylistId, TrackCount},
};

/// Appends `uris` to the playlist in batches of at most 100, in order.
///
/// Returns how many URIs were committed. When a batch fails the remaining
/// batches are not sent and the error reports the count already committed;
/// committed batches stay in the playlist.
pub async fn append<E: PlaylistEditor>(
    editor: &E,
    playlist: &PlaylistId,
    uris: &[String],
) -> Res<usize> {
    add_batches(editor, playlist, uris, 0, uris.len()).await
}

/// Replaces the playlist's contents with `uris`.
///
/// The first batch of up to 100 replaces the playlist (an empty slice clears
/// it), the rest is appended batch by batch.
pub async fn replace<E: PlaylistEditor>(
    editor: &E,
    playlist: &PlaylistId,
    uris: &[String],
) -> Res<usize> {
    let split = uris.len().min(MAX_URIS_PER_REQUEST);
    let (first, rest) = uris.split_at(split);

    editor
        .replace_items(playlist, first)
        .await
        .map_err(|e| aborted(0, uris.len(), e))?;

    add_batches(editor, playlist, rest, first.len(), uris.len()).await
}

/// Fails with [`Error::PermissionDenied`] unless the session's account owns
/// the playlist.
pub async fn ensure_owned<E: PlaylistEditor>(editor: &E, playlist: &PlaylistId) -> Res<()> {
    let owner = editor.playlist_owner(playlist).await?;
    if owner != editor.account_id() {
        return Err(Error::PermissionDenied {
            playlist: playlist.to_string(),
            owner,
        });
    }
    Ok(())
}

/// Replaces one of the account's playlists with its `count` most popular
/// tracks, most popular first.
///
/// Nothing is written unless the account owns the playlist and it has tracks.
/// Returns how many URIs the playlist holds afterwards.
pub async fn rewrite_ranked<C>(client: &C, playlist: &PlaylistId, count: TrackCount) -> Res<usize>
where
    C: TrackSource + PlaylistEditor,
{
    ensure_owned(client, playlist).await?;

    let current = tracks::fetch_all_tracks(client, playlist).await?;
    if current.is_empty() {
        return Err(Error::InvalidInput(format!(
            "playlist {} has no tracks",
            playlist
        )));
    }

    let ranked = ranking::rank(&current, count);
    replace(client, playlist, &tracks::track_uris(&ranked)).await
}

async fn add_batches<E: PlaylistEditor>(
    editor: &E,
    playlist: &PlaylistId,
    uris: &[String],
    already_committed: usize,
    total: usize,
) -> Res<usize> {
    let mut committed = already_committed;

    for chunk in uris.chunks(MAX_URIS_PER_REQUEST) {
        editor
            .add_items(playlist, chunk)
            .await
            .map_err(|e| aborted(committed, total, e))?;
        committed += chunk.len();
    }

    Ok(committed)
}

fn aborted(committed: usize, total: usize, cause: Error) -> Error {
    Error::BatchAborted {
        committed,
        total,
        reason: cause.to_string(),
    }
}
