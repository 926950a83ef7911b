//! Persistence of already processed track ids.
//!
//! Each source playlist has its own history and one global history spans all
//! sources. Histories only grow: ids are appended and never removed.
//!
//! Appends are not locked. Two `update` runs scanning the same source at the
//! same time may both append the same ids; loading collapses duplicates, so the
//! only effect is a longer file.

use std::{collections::HashSet, io::ErrorKind, path::PathBuf};

use tokio::io::AsyncWriteExt;

use crate::{Res, types::PlaylistId};

const GLOBAL_HISTORY_FILE: &str = "global_tracks.txt";
const SOURCE_HISTORY_DIR: &str = "history";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryScope<'a> {
    Global,
    Source(&'a PlaylistId),
}

/// Load-all and append capabilities over a set of history namespaces.
#[allow(async_fn_in_trait)]
pub trait HistoryStore {
    /// Every id recorded in `scope`. An unknown scope is an empty set.
    async fn load(&self, scope: HistoryScope<'_>) -> Res<HashSet<String>>;

    /// Records `ids` in `scope`.
    async fn append(&self, scope: HistoryScope<'_>, ids: &[String]) -> Res<()>;
}

/// Newline-delimited text files below a root directory.
///
/// - global: `<root>/global_tracks.txt`
/// - per source: `<root>/history/<playlist-id>_tracks.txt`
pub struct FileHistoryStore {
    root: PathBuf,
}

impl FileHistoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, scope: HistoryScope<'_>) -> PathBuf {
        match scope {
            HistoryScope::Global => self.root.join(GLOBAL_HISTORY_FILE),
            HistoryScope::Source(id) => self
                .root
                .join(SOURCE_HISTORY_DIR)
                .join(format!("{}_tracks.txt", id)),
        }
    }
}

impl HistoryStore for FileHistoryStore {
    async fn load(&self, scope: HistoryScope<'_>) -> Res<HashSet<String>> {
        let content = match async_fs::read_to_string(self.path(scope)).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashSet::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn append(&self, scope: HistoryScope<'_>, ids: &[String]) -> Res<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let path = self.path(scope);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let mut lines = ids.join("\n");
        lines.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(lines.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
