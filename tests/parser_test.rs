use pipedport::error::ConvertError;
use pipedport::spotify::parser::*;
use pipedport::types::TrackDescriptor;

fn track(artist: &str, title: &str) -> TrackDescriptor {
    TrackDescriptor::new(title, artist)
}

#[test]
fn test_parse_freeform_text() {
    let parsed = parse("My Mix\nA - B\nC - D").unwrap();

    assert_eq!(parsed.name, "My Mix");
    assert_eq!(parsed.tracks, vec![track("A", "B"), track("C", "D")]);
}

#[test]
fn test_parse_text_dash_family_and_fallback() {
    let parsed = parse_text(
        "Road Trip\n\n  Daft Punk – One More Time \nJay-Z — 99 Problems\nJust A Title\n3. Queen - Bohemian Rhapsody",
    );

    assert_eq!(parsed.name, "Road Trip");
    assert_eq!(
        parsed.tracks,
        vec![
            track("Daft Punk", "One More Time"),
            // A hyphen without spaces is part of the name
            track("Jay-Z", "99 Problems"),
            track("Unknown Artist", "Just A Title"),
            track("Queen", "Bohemian Rhapsody"),
        ]
    );
}

#[test]
fn test_parse_text_playlist_label() {
    // Label on the first line is stripped
    let parsed = parse_text("Playlist: Summer\nA - B");
    assert_eq!(parsed.name, "Summer");
    assert_eq!(parsed.tracks, vec![track("A", "B")]);

    // A later label names the playlist and the first line becomes a track
    let parsed = parse_text("Exported from Spotify\nA - B\nPLAYLIST: Winter\nC - D");
    assert_eq!(parsed.name, "Winter");
    assert_eq!(
        parsed.tracks,
        vec![
            track("Unknown Artist", "Exported from Spotify"),
            track("A", "B"),
            track("C", "D"),
        ]
    );
}

#[test]
fn test_parse_text_label_on_last_line() {
    let parsed = parse_text("A - B\nC - D\nPlaylist: Road Trip");

    assert_eq!(parsed.name, "Road Trip");
    assert_eq!(parsed.tracks, vec![track("A", "B"), track("C", "D")]);
}

#[test]
fn test_parse_text_later_label_overrides_leading_label() {
    let parsed = parse_text("Playlist: One\nA - B\nplaylist: Two\nplaylist: Three");

    assert_eq!(parsed.name, "Two");
    assert_eq!(parsed.tracks, vec![track("A", "B")]);
}

#[test]
fn test_parse_json_track_array() {
    let json = r#"{
        "name": "Focus",
        "tracks": [
            {"name": "Intro", "artists": [{"name": "The xx"}, {"name": "Other"}]},
            {"title": "Teardrop", "artist": "Massive Attack"},
            {"name": "Nameless"},
            {"artists": [{"name": "No Title"}]},
            {"name": "Plain", "artists": ["Bonobo"]}
        ]
    }"#;

    let parsed = parse(json).unwrap();
    assert_eq!(parsed.name, "Focus");
    assert_eq!(
        parsed.tracks,
        vec![
            track("The xx", "Intro"),
            track("Massive Attack", "Teardrop"),
            track("Unknown Artist", "Nameless"),
            track("Bonobo", "Plain"),
        ]
    );
}

#[test]
fn test_parse_json_api_shaped_page() {
    let json = r#"{
        "name": "From API",
        "tracks": {
            "items": [
                {"track": {"name": "Song 1", "artists": [{"name": "Artist 1"}]}},
                {"track": null},
                {"track": {"name": "Song 2", "artists": [{"name": "Artist 2"}]}}
            ],
            "next": null
        }
    }"#;

    let parsed = parse_json(json).unwrap();
    assert_eq!(parsed.name, "From API");
    assert_eq!(
        parsed.tracks,
        vec![track("Artist 1", "Song 1"), track("Artist 2", "Song 2")]
    );
}

#[test]
fn test_parse_json_without_name() {
    let parsed = parse(r#"{"tracks": [{"name": "X", "artist": "Y"}]}"#).unwrap();
    assert_eq!(parsed.name, "Untitled Playlist");
    assert_eq!(parsed.tracks, vec![track("Y", "X")]);
}

#[test]
fn test_wrong_json_shape_falls_back_to_text() {
    // Valid JSON, wrong shape: read as a single line of text
    assert!(parse_json(r#"{"title": "nope"}"#).is_none());

    let parsed = parse_text("[1, 2]\nA - B");
    assert_eq!(parsed.name, "[1, 2]");

    // Broken JSON is just text
    let parsed = parse("{\"name\": \"Half\nA - B").unwrap();
    assert_eq!(parsed.name, "{\"name\": \"Half");
    assert_eq!(parsed.tracks, vec![track("A", "B")]);
}

#[test]
fn test_parse_without_tracks_fails() {
    match parse("Only A Name") {
        Err(ConvertError::Parse(_)) => {}
        other => panic!("Expected Parse error, got {:?}", other),
    }

    match parse(r#"{"name": "Empty", "tracks": []}"#) {
        Err(ConvertError::Parse(_)) => {}
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_parse_track_line() {
    assert_eq!(parse_track_line("A - B - C"), track("A", "B - C"));
    assert_eq!(parse_track_line("1) A - B"), track("A", "B"));
    assert_eq!(parse_track_line("-"), track("Unknown Artist", "-"));
}
