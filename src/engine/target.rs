use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    Res,
    spotify::PlaylistEditor,
    types::PlaylistId,
    utils, warning,
};

/// Only the first page of the account's playlists is searched. Genres whose
/// playlist is older than the 50 most recent ones get a new playlist.
pub const PLAYLIST_LOOKUP_LIMIT: u32 = 50;

pub fn target_playlist_name(genre: &str, year: i32) -> String {
    format!("{} {}", genre, year)
}

/// Finds the account's `"{genre} {year}"` playlist or creates it.
///
/// A new playlist is private and gets `<images_dir>/<genre>.jpg` as cover
/// when that file exists. A missing image or a failed upload is only a
/// warning.
pub async fn resolve_target_playlist<E: PlaylistEditor>(
    editor: &E,
    genre: &str,
    year: i32,
    images_dir: &Path,
) -> Res<PlaylistId> {
    let name = target_playlist_name(genre, year);

    let existing = editor.user_playlists(PLAYLIST_LOOKUP_LIMIT).await?;
    if let Some(playlist) = existing.into_iter().find(|p| p.name == name) {
        return Ok(playlist.id);
    }

    let created = editor
        .create_playlist(&name, false, &format!("Auto-generated: {}", genre))
        .await?;

    let image_path = images_dir.join(utils::cover_image_name(genre));
    if image_path.is_file() {
        if let Err(e) = upload_cover(editor, &created.id, &image_path).await {
            warning!("Cover image {} not uploaded: {}", image_path.display(), e);
        }
    }

    Ok(created.id)
}

async fn upload_cover<E: PlaylistEditor>(
    editor: &E,
    playlist: &PlaylistId,
    image_path: &Path,
) -> Res<()> {
    let bytes = async_fs::read(image_path).await?;
    editor
        .upload_cover_image(playlist, &STANDARD.encode(bytes))
        .await
}
