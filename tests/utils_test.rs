use chrono::{TimeZone, Utc};
use spotlist::error::Error;
use spotlist::types::TrackCount;
use spotlist::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA-256 is 32 bytes, 43 characters in base64 without padding
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_playlist_id_from_url() {
    let id = parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(id.as_str(), "37i9dQZF1DXcBWIGoYBM5M");

    // Query strings and fragments are dropped
    let id =
        parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=a1b2c3")
            .unwrap();
    assert_eq!(id.as_str(), "37i9dQZF1DXcBWIGoYBM5M");

    let id = parse_playlist_id("https://open.spotify.com/playlist/abc123/#top").unwrap();
    assert_eq!(id.as_str(), "abc123");
}

#[test]
fn test_parse_playlist_id_from_uri_and_bare_id() {
    let id = parse_playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(id.as_str(), "37i9dQZF1DXcBWIGoYBM5M");

    let id = parse_playlist_id("  37i9dQZF1DXcBWIGoYBM5M ").unwrap();
    assert_eq!(id.as_str(), "37i9dQZF1DXcBWIGoYBM5M");
    assert_eq!(id.to_string(), "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_parse_playlist_id_invalid_inputs() {
    let invalid = [
        "",
        "   ",
        "https://open.spotify.com/playlist/",
        "https://open.spotify.com/album/123",
        "two words",
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC",
        "spotify:album:1DFixLWuPkv3KT3TnV35m3",
        "spotify:playlist:",
    ];

    for input in invalid {
        assert!(
            matches!(parse_playlist_id(input), Err(Error::InvalidInput(_))),
            "'{}' should be rejected",
            input
        );
    }
}

#[test]
fn test_normalize_genre() {
    assert_eq!(normalize_genre("rock"), "ROCK");
    assert_eq!(normalize_genre("drum&bass"), "DRUMANDBASS");
    assert_eq!(normalize_genre("hip_hop"), "HIP HOP");
    assert_eq!(normalize_genre("R&B_classics"), "RANDB CLASSICS");
}

#[test]
fn test_cover_image_name() {
    assert_eq!(cover_image_name("HIP HOP"), "hip_hop.jpg");
    assert_eq!(cover_image_name("ROCK"), "rock.jpg");
}

#[test]
fn test_parse_track_count_valid_inputs() {
    assert_eq!(parse_track_count("all").unwrap(), TrackCount::All);
    assert_eq!(parse_track_count("ALL").unwrap(), TrackCount::All);
    assert_eq!(parse_track_count("20").unwrap(), TrackCount::Top(20));
    assert_eq!(parse_track_count(" 1 ").unwrap(), TrackCount::Top(1));
}

#[test]
fn test_parse_track_count_invalid_inputs() {
    for input in ["0", "-5", "abc", "", "2.5"] {
        assert!(
            matches!(parse_track_count(input), Err(Error::InvalidInput(_))),
            "'{}' should be rejected",
            input
        );
    }
}

#[test]
fn test_track_id_from_uri() {
    assert_eq!(track_id_from_uri("spotify:track:4uLU6hMCjMI75M1A2tKUQC"), "4uLU6hMCjMI75M1A2tKUQC");
    assert_eq!(track_id_from_uri("4uLU6hMCjMI75M1A2tKUQC"), "4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_parse_added_at() {
    let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
    assert_eq!(parse_added_at(Some("2024-03-01T10:30:00Z")), Some(expected));
    assert_eq!(parse_added_at(Some("2024-03-01T11:30:00+01:00")), Some(expected));

    assert_eq!(parse_added_at(None), None);
    assert_eq!(parse_added_at(Some("")), None);
    assert_eq!(parse_added_at(Some("yesterday")), None);
}

#[test]
fn test_remove_duplicate_uris() {
    let mut uris = vec![
        "spotify:track:a".to_string(),
        "spotify:track:b".to_string(),
        "spotify:track:a".to_string(),
        "spotify:track:c".to_string(),
        "spotify:track:b".to_string(),
    ];
    remove_duplicate_uris(&mut uris);

    // First occurrence wins, order is kept
    assert_eq!(
        uris,
        vec!["spotify:track:a", "spotify:track:b", "spotify:track:c"]
    );
}
