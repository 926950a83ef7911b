#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use chrono::{DateTime, Duration, TimeZone, Utc};
use spotlist::{
    Res,
    error::Error,
    management::{HistoryScope, HistoryStore},
    spotify::{PlaylistEditor, TrackSource},
    types::{CreatedPlaylist, PlaylistId, PlaylistSummary, TrackPage, TrackRecord},
    utils::parse_playlist_id,
};

pub const ACCOUNT: &str = "me";

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> Option<DateTime<Utc>> {
    Some(now() - Duration::days(days))
}

pub fn pid(id: &str) -> PlaylistId {
    parse_playlist_id(id).unwrap()
}

// Helper function to create a test track
pub fn track(id: &str, popularity: u8, added_at: Option<DateTime<Utc>>) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        name: format!("Song {}", id),
        artist: format!("Artist {}", id),
        popularity,
        added_at,
    }
}

pub fn uri(id: &str) -> String {
    format!("spotify:track:{}", id)
}

pub fn uris(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| uri(id)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(String),
    Replace(String, Vec<String>),
    Add(String, Vec<String>),
    Cover(String),
}

/// In-memory stand-in for the Spotify session.
pub struct FakeSpotify {
    pub page_size: usize,
    pub contents: Mutex<HashMap<String, Vec<TrackRecord>>>,
    pub failing_sources: HashSet<String>,
    pub owners: HashMap<String, String>,
    pub playlists: Mutex<Vec<PlaylistSummary>>,
    pub calls: Mutex<Vec<Call>>,
    /// Add-items calls numbered from 1; this one fails.
    pub fail_add_call: Option<usize>,
    pub fail_create: bool,
    pub fail_cover: bool,
}

impl FakeSpotify {
    pub fn new() -> Self {
        Self {
            page_size: 2,
            contents: Mutex::new(HashMap::new()),
            failing_sources: HashSet::new(),
            owners: HashMap::new(),
            playlists: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            fail_add_call: None,
            fail_create: false,
            fail_cover: false,
        }
    }

    pub fn with_playlist(self, id: &str, tracks: Vec<TrackRecord>) -> Self {
        self.contents.lock().unwrap().insert(id.to_string(), tracks);
        self
    }

    pub fn with_owned(mut self, id: &str, name: &str, owner: &str) -> Self {
        self.owners.insert(id.to_string(), owner.to_string());
        self.playlists.lock().unwrap().push(PlaylistSummary {
            id: pid(id),
            name: name.to_string(),
        });
        self
    }

    pub fn set_tracks(&self, id: &str, tracks: Vec<TrackRecord>) {
        self.contents.lock().unwrap().insert(id.to_string(), tracks);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn added_to(&self, id: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Add(target, uris) if target == id => Some(uris),
                _ => None,
            })
            .flatten()
            .collect()
    }

    fn add_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, Call::Add(..)))
            .count()
    }
}

impl TrackSource for FakeSpotify {
    async fn track_page(&self, playlist: &PlaylistId, offset: u32) -> Res<TrackPage> {
        if self.failing_sources.contains(playlist.as_str()) {
            return Err(Error::Upstream("404 Not Found".to_string()));
        }

        let contents = self.contents.lock().unwrap();
        let tracks = contents
            .get(playlist.as_str())
            .ok_or_else(|| Error::Upstream("404 Not Found".to_string()))?;

        let start = (offset as usize).min(tracks.len());
        let end = (start + self.page_size).min(tracks.len());

        Ok(TrackPage {
            tracks: tracks[start..end].to_vec(),
            next_offset: (end < tracks.len()).then_some(end as u32),
        })
    }
}

impl PlaylistEditor for FakeSpotify {
    fn account_id(&self) -> &str {
        ACCOUNT
    }

    async fn user_playlists(&self, limit: u32) -> Res<Vec<PlaylistSummary>> {
        Ok(self
            .playlists
            .lock()
            .unwrap()
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn playlist_owner(&self, playlist: &PlaylistId) -> Res<String> {
        self.owners
            .get(playlist.as_str())
            .cloned()
            .ok_or_else(|| Error::Upstream("404 Not Found".to_string()))
    }

    async fn create_playlist(
        &self,
        name: &str,
        _public: bool,
        _description: &str,
    ) -> Res<CreatedPlaylist> {
        if self.fail_create {
            return Err(Error::Upstream("500 Internal Server Error".to_string()));
        }

        let mut calls = self.calls.lock().unwrap();
        let created = calls.iter().filter(|c| matches!(c, Call::Create(_))).count();
        calls.push(Call::Create(name.to_string()));

        let id = format!("created{}", created + 1);
        self.playlists.lock().unwrap().insert(
            0,
            PlaylistSummary {
                id: pid(&id),
                name: name.to_string(),
            },
        );

        Ok(CreatedPlaylist {
            id: pid(&id),
            url: format!("https://open.spotify.com/playlist/{}", id),
        })
    }

    async fn replace_items(&self, playlist: &PlaylistId, uris: &[String]) -> Res<()> {
        assert!(uris.len() <= 100, "batch of {} uris", uris.len());
        self.calls
            .lock()
            .unwrap()
            .push(Call::Replace(playlist.to_string(), uris.to_vec()));
        Ok(())
    }

    async fn add_items(&self, playlist: &PlaylistId, uris: &[String]) -> Res<()> {
        assert!(uris.len() <= 100, "batch of {} uris", uris.len());
        if self.fail_add_call == Some(self.add_calls() + 1) {
            return Err(Error::Upstream("429 Too Many Requests".to_string()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(Call::Add(playlist.to_string(), uris.to_vec()));
        Ok(())
    }

    async fn upload_cover_image(&self, playlist: &PlaylistId, _jpeg_base64: &str) -> Res<()> {
        if self.fail_cover {
            return Err(Error::Upstream("413 Payload Too Large".to_string()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(Call::Cover(playlist.to_string()));
        Ok(())
    }
}

/// History kept in memory, with an append log to inspect.
#[derive(Default)]
pub struct MemoryHistory {
    pub sets: Mutex<HashMap<String, Vec<String>>>,
}

impl MemoryHistory {
    pub fn key(scope: HistoryScope<'_>) -> String {
        match scope {
            HistoryScope::Global => "global".to_string(),
            HistoryScope::Source(id) => id.to_string(),
        }
    }

    pub fn ids(&self, scope: HistoryScope<'_>) -> Vec<String> {
        self.sets
            .lock()
            .unwrap()
            .get(&Self::key(scope))
            .cloned()
            .unwrap_or_default()
    }

    pub fn seed(&self, scope: HistoryScope<'_>, ids: &[&str]) {
        self.sets
            .lock()
            .unwrap()
            .entry(Self::key(scope))
            .or_default()
            .extend(ids.iter().map(|id| id.to_string()));
    }
}

impl HistoryStore for MemoryHistory {
    async fn load(&self, scope: HistoryScope<'_>) -> Res<HashSet<String>> {
        Ok(self.ids(scope).into_iter().collect())
    }

    async fn append(&self, scope: HistoryScope<'_>, ids: &[String]) -> Res<()> {
        if ids.is_empty() {
            return Ok(());
        }
        self.sets
            .lock()
            .unwrap()
            .entry(Self::key(scope))
            .or_default()
            .extend(ids.iter().cloned());
        Ok(())
    }
}
