use std::path::PathBuf;

use chrono::Utc;

use crate::{
    cli::{connect, spinner},
    config, engine,
    engine::GenreSummary,
    info,
    management::FileHistoryStore,
    success, warning,
};

/// Adds tracks recently added to the configured sources to the genre playlists.
pub async fn update(days: u32, playlists_file: Option<PathBuf>) {
    let path = playlists_file.unwrap_or_else(config::playlists_file);
    let content = match async_fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) => {
            warning!("Cannot read {}: {}", path.display(), e);
            return;
        }
    };

    let mapping = engine::parse_genre_mapping(&content);
    if mapping.is_empty() {
        warning!("No '<playlist> <genre>' lines found in {}", path.display());
        return;
    }

    let client = connect().await;
    info!("Logged in as {}", client.display_name());

    let history = FileHistoryStore::new(config::data_dir());

    let pb = spinner(format!(
        "Scanning {} genres for tracks added in the last {} days...",
        mapping.len(),
        days
    ));
    let reports = engine::run_update(
        &client,
        &history,
        &mapping,
        days,
        Utc::now(),
        &config::images_dir(),
    )
    .await;
    pb.finish_and_clear();

    let reports = match reports {
        Ok(reports) => reports,
        Err(e) => {
            warning!("Cannot load the track history: {}", e);
            return;
        }
    };

    for report in &reports {
        for failure in &report.failures {
            warning!("{}", failure);
        }

        match report.summary {
            GenreSummary::Added(_) => success!("{}", report),
            GenreSummary::NoNewTracks => info!("{}", report),
            GenreSummary::Failed(_) => warning!("{}", report),
        }
    }
}
