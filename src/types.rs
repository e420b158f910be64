use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::ConvertError;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNTITLED_PLAYLIST: &str = "Untitled Playlist";

/// Source kind inferred for one playlist reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    YouTube,
    SpotifyUrl,
    SpotifyFreeform,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceKind::YouTube => "youtube",
            SourceKind::SpotifyUrl => "spotify",
            SourceKind::SpotifyFreeform => "spotify-freeform",
        };
        write!(f, "{}", s)
    }
}

/// One unit of user input together with its 1-based input position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistReference {
    pub position: usize,
    pub raw: String,
    pub kind: SourceKind,
    pub source_id: String,
}

/// A YouTube video id: exactly 11 characters of `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    pub const LEN: usize = 11;

    pub fn is_valid(candidate: &str) -> bool {
        candidate.len() == Self::LEN
            && candidate
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for VideoId {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ConvertError::Parse(format!("'{}' is not a video id", s)))
        }
    }
}

impl TryFrom<String> for VideoId {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(ConvertError::Parse(format!("'{}' is not a video id", value)))
        }
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A title/artist pair used as a search key on YouTube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    pub title: String,
    pub artist: String,
}

impl TrackDescriptor {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    pub fn with_unknown_artist(title: impl Into<String>) -> Self {
        Self::new(title, UNKNOWN_ARTIST)
    }

    pub fn search_query(&self) -> String {
        format!("{} {}", self.artist, self.title)
    }
}

impl fmt::Display for TrackDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// Items of an extracted playlist before YouTube resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistItems {
    Videos(Vec<VideoId>),
    Tracks(Vec<TrackDescriptor>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPlaylist {
    pub id: String,
    pub name: String,
    pub items: PlaylistItems,
}

/// Name and tracks derived from Spotify data, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpotifyPlaylist {
    pub name: String,
    pub tracks: Vec<TrackDescriptor>,
}

/// Name and video ids scraped from a YouTube playlist page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedYouTubePlaylist {
    pub name: String,
    pub video_ids: Vec<VideoId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub n: usize,
    /// Songs contributed by this entry. Not part of the import format, so a
    /// document read back from JSON has 0 here.
    #[serde(skip)]
    pub song_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: VideoId,
    pub timestamp: String,
    pub list: String,
    pub n: usize,
}

/// The Piped Music import document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub playlists: Vec<PlaylistSummary>,
    pub songs: Vec<SongRecord>,
}

impl OutputDocument {
    /// Serializes the document with two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub n: usize,
    pub name: String,
    pub id: String,
    pub songs: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPlaylistResponse {
    pub id: String,
    pub name: String,
    pub tracks: SpotifyTrackPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrackPage {
    pub items: Vec<SpotifyPlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPlaylistItem {
    pub track: Option<SpotifyTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}
