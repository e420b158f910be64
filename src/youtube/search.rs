use std::{sync::LazyLock, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::{
    error::Result,
    extract::{Pattern, PatternChain},
    relay::RelayClient,
    types::{TrackDescriptor, VideoId},
    utils, warning,
};

static SEARCH_RESULT_PATTERNS: LazyLock<PatternChain> = LazyLock::new(|| {
    PatternChain::new(vec![
        Pattern::new("videoId", r#""videoId":"([A-Za-z0-9_-]{11})""#),
        Pattern::new("watch url", r"watch\?v=([A-Za-z0-9_-]{11})"),
        Pattern::new("relative watch url", r"/watch\?v=([A-Za-z0-9_-]{11})"),
    ])
});

/// Search results page URL for a query.
pub fn search_url(base_url: &str, query: &str) -> String {
    format!(
        "{base}/results?search_query={query}",
        base = base_url.trim_end_matches('/'),
        query = urlencoding::encode(query)
    )
}

/// Finds the first video id on a search results page.
pub fn extract_first_video_id(html: &str) -> Option<VideoId> {
    SEARCH_RESULT_PATTERNS.first_accepted(html, |raw| raw.parse::<VideoId>().ok())
}

/// Resolves Spotify style track descriptors to YouTube videos by search.
///
/// Searches run strictly one after another with a fixed pause in between to
/// stay clear of anti-automation checks.
pub struct TrackMatcher<'a> {
    relay: &'a RelayClient,
    base_url: &'a str,
    delay: Duration,
    show_progress: bool,
}

impl<'a> TrackMatcher<'a> {
    pub fn new(relay: &'a RelayClient, base_url: &'a str, delay: Duration) -> Self {
        Self {
            relay,
            base_url,
            delay,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Searches YouTube for one track and returns the first video found.
    pub async fn search(&self, track: &TrackDescriptor) -> Result<Option<VideoId>> {
        let html = self
            .relay
            .fetch(&search_url(self.base_url, &track.search_query()))
            .await?;
        Ok(extract_first_video_id(&html))
    }

    /// Matches every track in order and returns the distinct videos found.
    ///
    /// Tracks without a match, or whose search failed, are dropped with a
    /// warning. The pause is skipped after the last track.
    pub async fn match_tracks(&self, tracks: &[TrackDescriptor]) -> Vec<VideoId> {
        let pb = self.progress_bar(tracks.len() as u64);
        let mut video_ids = Vec::with_capacity(tracks.len());

        for (i, track) in tracks.iter().enumerate() {
            pb.set_message(track.to_string());

            match self.search(track).await {
                Ok(Some(id)) => video_ids.push(id),
                Ok(None) => pb.suspend(|| warning!("No video found for \"{}\"", track)),
                Err(e) => pb.suspend(|| warning!("Search for \"{}\" failed: {}", track, e)),
            }
            pb.inc(1);

            if i + 1 < tracks.len() && !self.delay.is_zero() {
                sleep(self.delay).await;
            }
        }

        pb.finish_and_clear();
        utils::remove_duplicates(&mut video_ids);
        video_ids
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) =
            ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {wide_msg}")
        {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb
    }
}
