use crate::{
    types::{GenreSources, PlaylistId},
    utils, warning,
};

/// Parses the `<playlist-url-or-id> <genre-label>` source list.
///
/// Blank lines, `#` comments and lines with fewer than two fields are
/// skipped; so are lines whose first field is not a playlist, with a warning.
/// Genres keep the order in which they first appear and list each source
/// once.
pub fn parse_genre_mapping(content: &str) -> Vec<GenreSources> {
    let mut mapping: Vec<GenreSources> = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(playlist), Some(label)) = (fields.next(), fields.next()) else {
            continue;
        };

        let id: PlaylistId = match utils::parse_playlist_id(playlist) {
            Ok(id) => id,
            Err(e) => {
                warning!("Skipping line {}: {}", number + 1, e);
                continue;
            }
        };

        let genre = utils::normalize_genre(label);
        match mapping.iter_mut().find(|g| g.genre == genre) {
            Some(existing) => {
                if !existing.sources.contains(&id) {
                    existing.sources.push(id);
                }
            }
            None => mapping.push(GenreSources {
                genre,
                sources: vec![id],
            }),
        }
    }

    mapping
}
