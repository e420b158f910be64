use pipedport::types::VideoId;
use pipedport::utils::*;

// Helper function to create a video id from a known-good literal
fn vid(id: &str) -> VideoId {
    id.parse().unwrap()
}

#[test]
fn test_remove_duplicates_keeps_first_occurrence() {
    let mut ids = vec![
        vid("dQw4w9WgXcQ"),
        vid("9bZkp7q19f0"),
        vid("dQw4w9WgXcQ"), // Duplicate
        vid("kJQP7kiw5Fk"),
        vid("9bZkp7q19f0"), // Duplicate
    ];

    remove_duplicates(&mut ids);

    let ids: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["dQw4w9WgXcQ", "9bZkp7q19f0", "kJQP7kiw5Fk"]);
}

#[test]
fn test_split_input_lines() {
    let input = "  first  \n\n\t\nsecond\r\n   third";
    let lines = split_input_lines(input);

    // Blank lines take no position
    assert_eq!(lines, vec![(1, "first"), (2, "second"), (3, "third")]);

    assert!(split_input_lines("   \n \n").is_empty());
}

#[test]
fn test_clean_playlist_name() {
    assert_eq!(clean_playlist_name("Chill Mix - YouTube"), "Chill Mix");
    assert_eq!(clean_playlist_name("  Chill Mix - YouTube  "), "Chill Mix");
    assert_eq!(clean_playlist_name("Chill Mix"), "Chill Mix");

    // Only a trailing suffix is removed
    assert_eq!(
        clean_playlist_name("YouTube - YouTube Classics"),
        "YouTube - YouTube Classics"
    );

    assert_eq!(clean_playlist_name(" - YouTube"), "");
}

#[test]
fn test_decode_html_entities() {
    assert_eq!(decode_html_entities("Rock &amp; Roll"), "Rock & Roll");
    assert_eq!(
        decode_html_entities("&quot;Hits&quot; &#39;90s"),
        "\"Hits\" '90s"
    );
    // &amp; is decoded last so escaped entities stay literal
    assert_eq!(decode_html_entities("&amp;lt;"), "&lt;");
    assert_eq!(decode_html_entities("plain"), "plain");
}

#[test]
fn test_iso_timestamp() {
    let timestamp = iso_timestamp();

    assert!(chrono::DateTime::parse_from_rfc3339(&timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
    // Millisecond precision like JavaScript's toISOString
    assert_eq!(timestamp.len(), "2024-05-01T12:00:00.000Z".len());
}

#[test]
fn test_fill_relay_template() {
    let target = "https://www.youtube.com/playlist?list=PL1";

    assert_eq!(
        fill_relay_template("https://corsproxy.io/?{encoded_url}", target),
        "https://corsproxy.io/?https%3A%2F%2Fwww.youtube.com%2Fplaylist%3Flist%3DPL1"
    );
    assert_eq!(
        fill_relay_template("https://cors-anywhere.herokuapp.com/{url}", target),
        "https://cors-anywhere.herokuapp.com/https://www.youtube.com/playlist?list=PL1"
    );
    assert_eq!(fill_relay_template("{url}", target), target);

    // No placeholder: encoded target is appended
    assert_eq!(
        fill_relay_template("https://relay.example/?q=", "a b"),
        "https://relay.example/?q=a%20b"
    );
}

#[test]
fn test_video_id_grammar() {
    assert!(VideoId::is_valid("dQw4w9WgXcQ"));
    assert!(VideoId::is_valid("a-b_c-d_e-f"));

    assert!(!VideoId::is_valid("dQw4w9WgXc")); // 10 chars
    assert!(!VideoId::is_valid("dQw4w9WgXcQQ")); // 12 chars
    assert!(!VideoId::is_valid("dQw4w9WgXc!"));
    assert!(!VideoId::is_valid("dQw4w9WgXcé"));

    assert!("bad".parse::<VideoId>().is_err());
    assert!(serde_json::from_str::<VideoId>("\"too-short\"").is_err());
    assert_eq!(
        serde_json::to_string(&vid("dQw4w9WgXcQ")).unwrap(),
        "\"dQw4w9WgXcQ\""
    );
}
