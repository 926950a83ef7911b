mod common;

use common::pid;
use spotlist::management::{FileHistoryStore, HistoryScope, HistoryStore};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_history_paths() {
    let store = FileHistoryStore::new("/data");
    let source = pid("37i9dQZF1DXcBWIGoYBM5M");

    assert_eq!(
        store.path(HistoryScope::Global),
        std::path::PathBuf::from("/data/global_tracks.txt")
    );
    assert_eq!(
        store.path(HistoryScope::Source(&source)),
        std::path::PathBuf::from("/data/history/37i9dQZF1DXcBWIGoYBM5M_tracks.txt")
    );
}

#[tokio::test]
async fn test_load_missing_history_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path());

    assert!(store.load(HistoryScope::Global).await.unwrap().is_empty());
    assert!(
        store
            .load(HistoryScope::Source(&pid("unknown")))
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_append_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path());
    let source = pid("source1");

    store
        .append(HistoryScope::Source(&source), &ids(&["a", "b"]))
        .await
        .unwrap();
    store
        .append(HistoryScope::Source(&source), &ids(&["c", "a"]))
        .await
        .unwrap();

    let loaded = store.load(HistoryScope::Source(&source)).await.unwrap();
    assert_eq!(loaded.len(), 3);
    assert!(["a", "b", "c"].iter().all(|id| loaded.contains(*id)));

    // Scopes are independent
    assert!(store.load(HistoryScope::Global).await.unwrap().is_empty());

    let raw = std::fs::read_to_string(store.path(HistoryScope::Source(&source))).unwrap();
    assert_eq!(raw, "a\nb\nc\na\n");
}

#[tokio::test]
async fn test_append_nothing_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path());

    store.append(HistoryScope::Global, &[]).await.unwrap();
    assert!(!store.path(HistoryScope::Global).exists());
}

#[tokio::test]
async fn test_load_ignores_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(dir.path());

    std::fs::write(store.path(HistoryScope::Global), "a\n\n  b  \n\n").unwrap();

    let loaded = store.load(HistoryScope::Global).await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.contains("a"));
    assert!(loaded.contains("b"));
}
