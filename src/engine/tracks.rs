use crate::{
    Res,
    error::Error,
    spotify::TrackSource,
    types::{PlaylistId, TrackRecord},
};

/// Fetches every page of `playlist` and returns the tracks in playlist order.
///
/// The whole playlist is in memory before this returns; a failure on any
/// page fails the call and discards the pages read so far. So does a page
/// whose next offset does not move forward.
pub async fn fetch_all_tracks<S: TrackSource>(
    source: &S,
    playlist: &PlaylistId,
) -> Res<Vec<TrackRecord>> {
    let mut tracks = Vec::new();
    let mut offset = Some(0);

    while let Some(current) = offset {
        let page = source.track_page(playlist, current).await?;
        tracks.extend(page.tracks);

        offset = match page.next_offset {
            Some(next) if next <= current => {
                return Err(Error::Upstream(format!(
                    "paging of playlist {} stalled at offset {}",
                    playlist, current
                )));
            }
            next => next,
        };
    }

    Ok(tracks)
}

pub fn track_uris(tracks: &[TrackRecord]) -> Vec<String> {
    tracks.iter().map(|t| t.uri.clone()).collect()
}
