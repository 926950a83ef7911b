mod common;

use common::pid;
use spotlist::engine::parse_genre_mapping;

#[test]
fn test_parse_genre_mapping() {
    let content = "\
# source playlists
https://open.spotify.com/playlist/aaa?si=1 rock

spotify:playlist:bbb hip_hop
ccc Rock
ddd drum&bass
";

    let mapping = parse_genre_mapping(content);

    let genres: Vec<&str> = mapping.iter().map(|g| g.genre.as_str()).collect();
    assert_eq!(genres, vec!["ROCK", "HIP HOP", "DRUMANDBASS"]);

    assert_eq!(mapping[0].sources, vec![pid("aaa"), pid("ccc")]);
    assert_eq!(mapping[1].sources, vec![pid("bbb")]);
    assert_eq!(mapping[2].sources, vec![pid("ddd")]);
}

#[test]
fn test_parse_genre_mapping_skips_bad_lines() {
    let content = "\
only_one_field
https://open.spotify.com/playlist/ rock
aaa jazz extra fields
aaa jazz
";

    let mapping = parse_genre_mapping(content);

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping[0].genre, "JAZZ");
    // Repeated sources are listed once
    assert_eq!(mapping[0].sources, vec![pid("aaa")]);
}

#[test]
fn test_parse_genre_mapping_empty() {
    assert!(parse_genre_mapping("").is_empty());
    assert!(parse_genre_mapping("# nothing here\n\n").is_empty());
}
