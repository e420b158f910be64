use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::{
    error::{ConvertError, Result},
    types::{ParsedSpotifyPlaylist, TrackDescriptor, UNKNOWN_ARTIST, UNTITLED_PLAYLIST},
};

static TRACK_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+[-–—]\s+(.+)$").unwrap());

static LIST_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+").unwrap());

const PLAYLIST_LABEL: &str = "playlist:";

#[derive(Debug, Deserialize)]
struct PastedPlaylist {
    name: Option<String>,
    tracks: PastedTracks,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PastedTracks {
    List(Vec<PastedItem>),
    Page { items: Vec<PastedItem> },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PastedItem {
    Wrapped {
        #[serde(deserialize_with = "Option::deserialize")]
        track: Option<PastedTrack>,
    },
    Bare(PastedTrack),
}

#[derive(Debug, Deserialize)]
struct PastedTrack {
    name: Option<String>,
    title: Option<String>,
    #[serde(default)]
    artists: Vec<PastedArtist>,
    artist: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PastedArtist {
    Named { name: String },
    Plain(String),
}

impl PastedArtist {
    fn name(&self) -> &str {
        match self {
            PastedArtist::Named { name } => name,
            PastedArtist::Plain(name) => name,
        }
    }
}

impl PastedTrack {
    fn into_descriptor(self) -> Option<TrackDescriptor> {
        let title = self
            .name
            .or(self.title)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())?;

        let artist = self
            .artists
            .first()
            .map(|a| a.name().trim().to_string())
            .or(self.artist.map(|a| a.trim().to_string()))
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

        Some(TrackDescriptor { title, artist })
    }
}

/// Parses pasted Spotify playlist data.
///
/// The text is read as JSON first: an object with a `name` and a `tracks`
/// array, or a `tracks` page shaped like the Web API's
/// (`{"items": [{"track": {...}}]}`). If that fails for whatever reason the
/// text is read line by line instead, see [`parse_text`].
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] when neither reading yields a track.
///
/// # Example
///
/// ```
/// let parsed = parse("My Mix\nA - B\nC - D")?;
/// assert_eq!(parsed.name, "My Mix");
/// assert_eq!(parsed.tracks.len(), 2);
/// ```
pub fn parse(input: &str) -> Result<ParsedSpotifyPlaylist> {
    let parsed = match parse_json(input) {
        Some(parsed) => parsed,
        None => parse_text(input),
    };

    if parsed.tracks.is_empty() {
        return Err(ConvertError::Parse(
            "no tracks found in pasted Spotify data".to_string(),
        ));
    }

    Ok(parsed)
}

/// Reads the structured JSON form, `None` on any parse or shape error.
pub fn parse_json(input: &str) -> Option<ParsedSpotifyPlaylist> {
    let pasted: PastedPlaylist = serde_json::from_str(input.trim()).ok()?;

    let items = match pasted.tracks {
        PastedTracks::List(items) => items,
        PastedTracks::Page { items } => items,
    };

    let tracks = items
        .into_iter()
        .filter_map(|item| match item {
            PastedItem::Wrapped { track } => track,
            PastedItem::Bare(track) => Some(track),
        })
        .filter_map(PastedTrack::into_descriptor)
        .collect();

    let name = pasted
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNTITLED_PLAYLIST.to_string());

    Some(ParsedSpotifyPlaylist { name, tracks })
}

/// Reads the freeform line grammar.
///
/// The first non-blank line names the playlist, unless a later line starts
/// with `playlist:` (any case). Then the first such label names it and the
/// first line is read as a track. Label lines are never tracks. Every other
/// line is `artist - title`, with a hyphen, en dash or em dash between
/// spaces; lines without a separator become a title by an unknown artist.
pub fn parse_text(input: &str) -> ParsedSpotifyPlaylist {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some((&first, rest)) = lines.split_first() else {
        return ParsedSpotifyPlaylist {
            name: UNTITLED_PLAYLIST.to_string(),
            tracks: Vec::new(),
        };
    };

    let first_label = strip_label(first);
    let later_label = rest.iter().find_map(|line| strip_label(line));

    let mut tracks = Vec::with_capacity(lines.len());
    let name = match later_label {
        Some(label) => {
            if first_label.is_none() {
                tracks.push(parse_track_line(first));
            }
            label
        }
        None => first_label.unwrap_or(first),
    };

    tracks.extend(
        rest.iter()
            .filter(|line| strip_label(line).is_none())
            .map(|line| parse_track_line(line)),
    );

    let name = match name.trim() {
        "" => UNTITLED_PLAYLIST.to_string(),
        trimmed => trimmed.to_string(),
    };

    ParsedSpotifyPlaylist { name, tracks }
}

/// Splits one `artist - title` line.
pub fn parse_track_line(line: &str) -> TrackDescriptor {
    let line = LIST_NUMBER_RE.replace(line.trim(), "");

    match TRACK_LINE_RE.captures(&line) {
        Some(caps) => TrackDescriptor::new(caps[2].trim(), caps[1].trim()),
        None => TrackDescriptor::with_unknown_artist(line.trim()),
    }
}

fn strip_label(line: &str) -> Option<&str> {
    let head = line.get(..PLAYLIST_LABEL.len())?;
    if head.eq_ignore_ascii_case(PLAYLIST_LABEL) {
        Some(&line[PLAYLIST_LABEL.len()..])
    } else {
        None
    }
}
