//! # Pipeline Module
//!
//! Drives one conversion run from raw input to the export document:
//!
//! ```text
//! input ─▶ classify ─┬─▶ YouTube page scrape ─────────────────────┐
//!                    ├─▶ Spotify Web API ───┐                     │
//!                    └─▶ Spotify pasted data ┴─▶ YouTube search ──┴─▶ aggregate
//! ```
//!
//! References are processed strictly one at a time in input order and every
//! fetch inside a reference is awaited before the next one starts. A failing
//! reference is reported and skipped; only missing input, missing Spotify
//! credentials and a run without a single song abort.

mod aggregate;

pub use aggregate::Aggregator;

use clap::ValueEnum;
use reqwest::Client;

use crate::{
    classify,
    config::Settings,
    error::{ConvertError, Result},
    info,
    relay::{self, RelayClient},
    spotify::{parser, playlist::SpotifyApiResolver},
    success,
    types::{ExtractedPlaylist, OutputDocument, PlaylistItems, PlaylistReference, SourceKind, VideoId},
    utils, warning,
    youtube::{playlist as yt_playlist, search::TrackMatcher},
};

/// How raw input is turned into references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputMode {
    /// URLs if any line is a playlist link, pasted Spotify data otherwise
    #[default]
    Auto,
    /// One playlist link per line
    Urls,
    /// The whole input is pasted Spotify data
    Freeform,
}

/// Work derived from the input before any network access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub references: Vec<PlaylistReference>,
    /// Number of input positions, recognized or not
    pub positions: usize,
}

/// Builds the references for a run.
///
/// In URL mode every non-blank line takes an input position; unrecognized
/// lines are reported and skipped but keep their position, so later
/// playlists are numbered by where they appeared.
///
/// # Errors
///
/// Returns [`ConvertError::Input`] for blank input.
pub fn plan(input: &str, mode: InputMode) -> Result<RunPlan> {
    let lines = utils::split_input_lines(input);
    if lines.is_empty() {
        return Err(ConvertError::Input("input is empty".to_string()));
    }

    let mode = match mode {
        InputMode::Auto => {
            if lines
                .iter()
                .any(|(_, line)| classify::is_playlist_link(line))
            {
                InputMode::Urls
            } else {
                InputMode::Freeform
            }
        }
        other => other,
    };

    if mode == InputMode::Freeform {
        return Ok(RunPlan {
            references: vec![classify::freeform_reference(input)],
            positions: 1,
        });
    }

    let mut references = Vec::new();
    for (position, line) in &lines {
        match classify::to_reference(*position, line) {
            Some(reference) => references.push(reference),
            None => warning!(
                "Skipping line {}: not a YouTube or Spotify playlist link",
                position
            ),
        }
    }

    Ok(RunPlan {
        references,
        positions: lines.len(),
    })
}

/// A configured converter. Build once, run any number of times.
pub struct Pipeline {
    settings: Settings,
    http: Client,
    relay: RelayClient,
}

impl Pipeline {
    pub fn new(settings: Settings) -> Result<Self> {
        let http = relay::build_http_client(settings.request_timeout)?;
        let relay = RelayClient::new(http.clone(), settings.relays.clone());
        Ok(Self {
            settings,
            http,
            relay,
        })
    }

    /// Converts raw input into the export document.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::Input`] for blank input
    /// - [`ConvertError::Config`] when a Spotify link is present but no
    ///   credentials are configured, before any request is made
    /// - [`ConvertError::Aggregate`] when no reference yielded a song
    pub async fn run(&self, input: &str, mode: InputMode) -> Result<OutputDocument> {
        let plan = plan(input, mode)?;
        self.execute(&plan).await
    }

    /// Processes a prepared plan.
    pub async fn execute(&self, plan: &RunPlan) -> Result<OutputDocument> {
        if plan
            .references
            .iter()
            .any(|r| r.kind == SourceKind::SpotifyUrl)
        {
            self.settings.require_spotify_credentials()?;
        }

        let mut aggregator = Aggregator::new();

        for reference in &plan.references {
            info!(
                "[{}/{}] Processing {} playlist {}",
                reference.position, plan.positions, reference.kind, reference.source_id
            );

            let playlist = match self.extract(reference).await {
                Ok(playlist) => playlist,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warning!("Skipping line {}: {}", reference.position, e);
                    continue;
                }
            };

            let video_ids = self.resolve_videos(&playlist.items).await;
            let added = aggregator.add_playlist(
                reference.position,
                &playlist.id,
                &playlist.name,
                video_ids,
            );

            if added == 0 {
                warning!(
                    "Skipping line {}: no songs resolved for \"{}\"",
                    reference.position,
                    playlist.name
                );
            } else {
                success!("\"{}\": {} songs", playlist.name, added);
            }
        }

        aggregator.finish(plan.positions)
    }

    /// Runs the source-specific strategy for one reference.
    pub async fn extract(&self, reference: &PlaylistReference) -> Result<ExtractedPlaylist> {
        match reference.kind {
            SourceKind::YouTube => {
                let scraped = yt_playlist::fetch_playlist(
                    &self.relay,
                    &self.settings.youtube_base_url,
                    &reference.source_id,
                )
                .await?;
                Ok(ExtractedPlaylist {
                    id: reference.source_id.clone(),
                    name: scraped.name,
                    items: PlaylistItems::Videos(scraped.video_ids),
                })
            }
            SourceKind::SpotifyUrl => {
                let credentials = self.settings.require_spotify_credentials()?;
                let parsed = SpotifyApiResolver::new(
                    &self.http,
                    credentials,
                    &self.settings.spotify_api_url,
                    &self.settings.spotify_token_url,
                )
                .resolve(&reference.source_id)
                .await?;
                if parsed.tracks.is_empty() {
                    return Err(ConvertError::Parse(
                        "Spotify playlist has no tracks".to_string(),
                    ));
                }
                Ok(ExtractedPlaylist {
                    id: reference.source_id.clone(),
                    name: parsed.name,
                    items: PlaylistItems::Tracks(parsed.tracks),
                })
            }
            SourceKind::SpotifyFreeform => {
                let parsed = parser::parse(&reference.raw)?;
                Ok(ExtractedPlaylist {
                    id: reference.source_id.clone(),
                    name: parsed.name,
                    items: PlaylistItems::Tracks(parsed.tracks),
                })
            }
        }
    }

    async fn resolve_videos(&self, items: &PlaylistItems) -> Vec<VideoId> {
        match items {
            PlaylistItems::Videos(ids) => ids.clone(),
            PlaylistItems::Tracks(tracks) => {
                info!("Searching YouTube for {} tracks", tracks.len());
                TrackMatcher::new(
                    &self.relay,
                    &self.settings.youtube_base_url,
                    self.settings.search_delay,
                )
                .with_progress(self.settings.show_progress)
                .match_tracks(tracks)
                .await
            }
        }
    }
}

