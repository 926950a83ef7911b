use crate::types::{TrackCount, TrackRecord};

/// Sorts by popularity, most popular first, and keeps the first `count` tracks.
///
/// The sort is stable: tracks with the same popularity keep their playlist
/// order. A count larger than the playlist returns every track.
pub fn rank(tracks: &[TrackRecord], count: TrackCount) -> Vec<TrackRecord> {
    let mut ranked = tracks.to_vec();
    ranked.sort_by(|a, b| b.popularity.cmp(&a.popularity));

    if let TrackCount::Top(n) = count {
        ranked.truncate(n);
    }

    ranked
}
