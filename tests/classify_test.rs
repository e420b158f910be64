use pipedport::classify::*;
use pipedport::error::ConvertError;
use pipedport::pipeline::{InputMode, plan};
use pipedport::types::SourceKind;

#[test]
fn test_classify_youtube_playlist() {
    let c = classify_line("https://www.youtube.com/playlist?list=PL3-sRm8xAzY9gpXTMGVHJWy_FMD67NBed");
    assert_eq!(
        c,
        Classification::YouTube("PL3-sRm8xAzY9gpXTMGVHJWy_FMD67NBed".to_string())
    );

    // list as a secondary parameter of a watch link
    let c = classify_line("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLabc_123&index=2");
    assert_eq!(c, Classification::YouTube("PLabc_123".to_string()));
}

#[test]
fn test_classify_spotify_playlist() {
    let c = classify_line(
        "https://open.spotify.com/playlist/5jzdgLICTPytquCAYmcHuC?si=FPWHEcnZReicptFDNUeSsQ",
    );
    assert_eq!(
        c,
        Classification::SpotifyUrl("5jzdgLICTPytquCAYmcHuC".to_string())
    );
}

#[test]
fn test_classify_order_prefers_youtube() {
    let c = classify_line("https://example.com/playlist/abc?list=PLx");
    assert_eq!(c, Classification::YouTube("PLx".to_string()));
}

#[test]
fn test_classify_unrecognized() {
    assert_eq!(
        classify_line("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        Classification::Unrecognized
    );
    assert_eq!(
        classify_line("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"),
        Classification::Unrecognized
    );
    assert_eq!(classify_line("Daft Punk - One More Time"), Classification::Unrecognized);
    assert!(!classify_line("hello").is_recognized());
}

#[test]
fn test_plan_keeps_positions_of_skipped_lines() {
    let input = "not a link\n\nhttps://www.youtube.com/playlist?list=PL2\nhttps://open.spotify.com/playlist/abc";
    let plan = plan(input, InputMode::Urls).unwrap();

    assert_eq!(plan.positions, 3);
    assert_eq!(plan.references.len(), 2);
    assert_eq!(plan.references[0].position, 2);
    assert_eq!(plan.references[0].kind, SourceKind::YouTube);
    assert_eq!(plan.references[0].source_id, "PL2");
    assert_eq!(plan.references[1].position, 3);
    assert_eq!(plan.references[1].kind, SourceKind::SpotifyUrl);
}

#[test]
fn test_plan_auto_mode() {
    // Any recognized link switches to line-by-line handling
    let plan_urls = plan("junk\nhttps://www.youtube.com/playlist?list=PL1", InputMode::Auto).unwrap();
    assert_eq!(plan_urls.references.len(), 1);
    assert_eq!(plan_urls.references[0].kind, SourceKind::YouTube);

    // No link at all: the whole block is pasted Spotify data
    let text = "My Mix\nA - B\nC - D";
    let plan_text = plan(text, InputMode::Auto).unwrap();
    assert_eq!(plan_text.positions, 1);
    assert_eq!(plan_text.references.len(), 1);
    assert_eq!(plan_text.references[0].kind, SourceKind::SpotifyFreeform);
    assert_eq!(plan_text.references[0].source_id, FREEFORM_PLAYLIST_ID);
    assert_eq!(plan_text.references[0].raw, text);
}

#[test]
fn test_plan_auto_mode_ignores_link_like_titles() {
    // A track title containing "playlist/" is not a link
    let text = "Road Trip\nA - B\nAC/DC - My playlist/2020 mix";
    let plan = plan(text, InputMode::Auto).unwrap();

    assert_eq!(plan.positions, 1);
    assert_eq!(plan.references.len(), 1);
    assert_eq!(plan.references[0].kind, SourceKind::SpotifyFreeform);
    assert_eq!(plan.references[0].raw, text);
}

#[test]
fn test_is_playlist_link() {
    assert!(is_playlist_link("https://www.youtube.com/playlist?list=PL1"));
    assert!(is_playlist_link("HTTPS://OPEN.SPOTIFY.COM/playlist/abc"));
    assert!(is_playlist_link("www.youtube.com/playlist?list=PL1"));
    assert!(is_playlist_link("open.spotify.com/playlist/abc"));

    assert!(!is_playlist_link("AC/DC - My playlist/2020 mix"));
    assert!(!is_playlist_link("Artist - track?list=1"));
    assert!(!is_playlist_link("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
}

#[test]
fn test_plan_freeform_mode_ignores_links() {
    let plan = plan(
        "https://www.youtube.com/playlist?list=PL1\nA - B",
        InputMode::Freeform,
    )
    .unwrap();
    assert_eq!(plan.references.len(), 1);
    assert_eq!(plan.references[0].kind, SourceKind::SpotifyFreeform);
}

#[test]
fn test_plan_rejects_blank_input() {
    for input in ["", "   ", "\n\n  \n"] {
        match plan(input, InputMode::Auto) {
            Err(ConvertError::Input(_)) => {}
            other => panic!("Expected Input error, got {:?}", other),
        }
    }
}
