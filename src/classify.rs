use std::sync::LazyLock;

use regex::Regex;

use crate::types::{PlaylistReference, SourceKind};

static YOUTUBE_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]list=([A-Za-z0-9_-]+)").unwrap());

static SPOTIFY_PLAYLIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playlist/([A-Za-z0-9]+)").unwrap());

const LINK_HOSTS: [&str; 3] = ["youtube.com/", "youtu.be/", "spotify.com/"];

/// Id reserved for the single pasted Spotify block of a run.
pub const FREEFORM_PLAYLIST_ID: &str = "spotify-freeform";

/// Result of classifying one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// YouTube playlist with its `list` id
    YouTube(String),
    /// Spotify playlist link with its playlist id
    SpotifyUrl(String),
    Unrecognized,
}

impl Classification {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Classification::Unrecognized)
    }
}

/// Classifies one trimmed input line.
///
/// A `list=` query parameter wins over a Spotify `playlist/` segment, so a
/// line carrying both is treated as YouTube.
///
/// # Example
///
/// ```
/// let c = classify_line("https://www.youtube.com/playlist?list=PLabc");
/// assert_eq!(c, Classification::YouTube("PLabc".to_string()));
/// ```
pub fn classify_line(line: &str) -> Classification {
    if let Some(id) = capture(&YOUTUBE_LIST_RE, line) {
        return Classification::YouTube(id);
    }

    if let Some(id) = capture(&SPOTIFY_PLAYLIST_RE, line) {
        return Classification::SpotifyUrl(id);
    }

    Classification::Unrecognized
}

/// Whether a line is a playlist link rather than text that happens to contain
/// `list=` or `playlist/`, such as a pasted track title.
pub fn is_playlist_link(line: &str) -> bool {
    if !classify_line(line).is_recognized() {
        return false;
    }

    let lower = line.to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || LINK_HOSTS.iter().any(|host| lower.contains(host))
}

/// Builds a reference from a classified line, or `None` when unrecognized.
pub fn to_reference(position: usize, line: &str) -> Option<PlaylistReference> {
    let (kind, source_id) = match classify_line(line) {
        Classification::YouTube(id) => (SourceKind::YouTube, id),
        Classification::SpotifyUrl(id) => (SourceKind::SpotifyUrl, id),
        Classification::Unrecognized => return None,
    };

    Some(PlaylistReference {
        position,
        raw: line.to_string(),
        kind,
        source_id,
    })
}

/// Wraps a whole pasted block as the run's single freeform reference.
pub fn freeform_reference(text: &str) -> PlaylistReference {
    PlaylistReference {
        position: 1,
        raw: text.to_string(),
        kind: SourceKind::SpotifyFreeform,
        source_id: FREEFORM_PLAYLIST_ID.to_string(),
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
