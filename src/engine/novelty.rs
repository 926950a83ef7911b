//! Detection of recently added tracks that were never processed before.
//!
//! A track is new for a genre when it was added to one of the genre's source
//! playlists within the trailing window and its id is neither in that source's
//! history nor in the global history. New ids are written to both histories
//! once the source has been read completely, so a failing source records
//! nothing while sources that already completed keep their records. A source
//! that was read but whose history could not be written still contributes its
//! tracks; the write failure is reported next to them.

use std::{collections::HashSet, fmt, path::Path};

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::{
    Res,
    engine::{mutator, target, tracks::fetch_all_tracks},
    error::Error,
    management::{HistoryScope, HistoryStore},
    spotify::{PlaylistEditor, TrackSource},
    types::{GenreSources, PlaylistId},
    utils,
};

/// Result of scanning all sources of one genre.
#[derive(Debug, Default)]
pub struct GenreScan {
    /// New track URIs, without duplicates, in discovery order.
    pub uris: Vec<String>,
    /// One [`Error::PartialScanFailure`] per skipped source and one
    /// [`Error::HistoryNotSaved`] per source whose history write failed.
    pub failures: Vec<Error>,
}

struct SourceScan {
    ids: Vec<String>,
    uris: Vec<String>,
    unrecorded: Option<Error>,
}

pub struct NoveltyScanner<'a, S, H> {
    source: &'a S,
    history: &'a H,
    cutoff: DateTime<Utc>,
}

impl<'a, S: TrackSource, H: HistoryStore> NoveltyScanner<'a, S, H> {
    /// Tracks added at or after `now - window_days` count as recent.
    pub fn new(source: &'a S, history: &'a H, window_days: u32, now: DateTime<Utc>) -> Self {
        Self {
            source,
            history,
            cutoff: now - Duration::days(window_days as i64),
        }
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    /// Scans `sources` in order and marks every new id in `global`.
    pub async fn scan_genre(
        &self,
        sources: &[PlaylistId],
        global: &mut HashSet<String>,
    ) -> GenreScan {
        let mut scan = GenreScan::default();

        for playlist in sources {
            match self.scan_source(playlist, global).await {
                Ok(found) => {
                    if let Some(e) = found.unrecorded {
                        scan.failures.push(Error::HistoryNotSaved {
                            playlist: playlist.to_string(),
                            reason: e.to_string(),
                        });
                    }
                    global.extend(found.ids);
                    scan.uris.extend(found.uris);
                }
                Err(e) => scan.failures.push(Error::PartialScanFailure {
                    playlist: playlist.to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        utils::remove_duplicate_uris(&mut scan.uris);
        scan
    }

    async fn scan_source(
        &self,
        playlist: &PlaylistId,
        global: &HashSet<String>,
    ) -> Res<SourceScan> {
        let known = self.history.load(HistoryScope::Source(playlist)).await?;
        let tracks = fetch_all_tracks(self.source, playlist).await?;

        let mut staged: HashSet<&str> = HashSet::new();
        let mut source_ids = Vec::new();
        let mut uris = Vec::new();

        for track in &tracks {
            let Some(added_at) = track.added_at else {
                continue;
            };
            if added_at < self.cutoff {
                continue;
            }
            if known.contains(&track.id) || global.contains(&track.id) {
                continue;
            }
            if !staged.insert(track.id.as_str()) {
                continue;
            }

            source_ids.push(track.id.clone());
            uris.push(track.uri.clone());
        }

        let global_ids: Vec<String> = uris
            .iter()
            .map(|uri| utils::track_id_from_uri(uri).to_string())
            .collect();

        let unrecorded = self
            .record(playlist, &source_ids, &global_ids)
            .await
            .err();

        let mut ids = source_ids;
        ids.extend(global_ids);

        Ok(SourceScan {
            ids,
            uris,
            unrecorded,
        })
    }

    async fn record(
        &self,
        playlist: &PlaylistId,
        source_ids: &[String],
        global_ids: &[String],
    ) -> Res<()> {
        self.history
            .append(HistoryScope::Source(playlist), source_ids)
            .await?;
        self.history.append(HistoryScope::Global, global_ids).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreSummary {
    Added(usize),
    NoNewTracks,
    Failed(String),
}

/// Outcome of one genre in an update run.
#[derive(Debug)]
pub struct GenreReport {
    pub genre: String,
    pub summary: GenreSummary,
    pub failures: Vec<Error>,
}

impl fmt::Display for GenreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.summary {
            GenreSummary::Added(n) => write!(f, "{}: +{} tracks", self.genre, n),
            GenreSummary::NoNewTracks => write!(f, "{}: no new tracks", self.genre),
            GenreSummary::Failed(reason) => write!(f, "{}: failed ({})", self.genre, reason),
        }
    }
}

/// Refreshes every genre's `"{GENRE} {year}"` playlist with new tracks.
///
/// Genres are processed in mapping order. A genre whose target playlist
/// cannot be resolved is reported as failed without touching any history;
/// a failing source or a failing batch only affects its own genre.
///
/// # Errors
///
/// Only when the global history cannot be loaded; nothing is scanned then.
pub async fn run_update<C, H>(
    client: &C,
    history: &H,
    mapping: &[GenreSources],
    window_days: u32,
    now: DateTime<Utc>,
    images_dir: &Path,
) -> Res<Vec<GenreReport>>
where
    C: TrackSource + PlaylistEditor,
    H: HistoryStore,
{
    let mut global = history.load(HistoryScope::Global).await?;
    let scanner = NoveltyScanner::new(client, history, window_days, now);
    let mut reports = Vec::new();

    for entry in mapping {
        let target =
            match target::resolve_target_playlist(client, &entry.genre, now.year(), images_dir)
                .await
            {
                Ok(id) => id,
                Err(e) => {
                    reports.push(GenreReport {
                        genre: entry.genre.clone(),
                        summary: GenreSummary::Failed(e.to_string()),
                        failures: Vec::new(),
                    });
                    continue;
                }
            };

        let scan = scanner.scan_genre(&entry.sources, &mut global).await;

        let summary = if scan.uris.is_empty() {
            GenreSummary::NoNewTracks
        } else {
            match mutator::append(client, &target, &scan.uris).await {
                Ok(added) => GenreSummary::Added(added),
                Err(e) => GenreSummary::Failed(e.to_string()),
            }
        };

        reports.push(GenreReport {
            genre: entry.genre.clone(),
            summary,
            failures: scan.failures,
        });
    }

    Ok(reports)
}
