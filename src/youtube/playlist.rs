use std::sync::LazyLock;

use crate::{
    error::{ConvertError, Result},
    extract::{Pattern, PatternChain},
    relay::RelayClient,
    types::{ScrapedYouTubePlaylist, UNTITLED_PLAYLIST, VideoId},
    utils,
};

static NAME_PATTERNS: LazyLock<PatternChain> = LazyLock::new(|| {
    PatternChain::new(vec![
        Pattern::new(
            "og:title",
            r#"<meta\s+property="og:title"\s+content="([^"]*)""#,
        ),
        Pattern::new("title", r"(?s)<title[^>]*>(.*?)</title>"),
        Pattern::new(
            "inline title",
            r#""title":"((?:[^"\\]|\\.)+)","description""#,
        )
        .json_string(),
        Pattern::new("playlistTitle", r#""playlistTitle":"((?:[^"\\]|\\.)+)""#).json_string(),
    ])
});

static VIDEO_ID_PATTERN: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new("videoId", r#""videoId":"([A-Za-z0-9_-]{11})""#));

/// Canonical playlist page URL for a `list` id.
pub fn playlist_url(base_url: &str, list_id: &str) -> String {
    format!(
        "{base}/playlist?list={list}",
        base = base_url.trim_end_matches('/'),
        list = list_id
    )
}

/// Extracts the playlist name from a playlist page.
///
/// Tries the `og:title` meta tag, the document title, an inline `"title"`
/// right before `"description"` and an inline `"playlistTitle"`, in that
/// order. JSON escapes in the inline values are resolved. A value that is
/// empty once cleaned does not count as a match.
pub fn extract_name(html: &str) -> String {
    NAME_PATTERNS
        .first_accepted(html, |raw| {
            let name = utils::clean_playlist_name(&utils::decode_html_entities(raw));
            (!name.is_empty()).then_some(name)
        })
        .unwrap_or_else(|| UNTITLED_PLAYLIST.to_string())
}

/// Collects every inline `"videoId"` in first-seen order without repeats.
pub fn extract_video_ids(html: &str) -> Vec<VideoId> {
    let mut ids: Vec<VideoId> = VIDEO_ID_PATTERN
        .all(html)
        .filter_map(|raw| raw.parse().ok())
        .collect();
    utils::remove_duplicates(&mut ids);
    ids
}

/// Extracts name and videos from a fetched playlist page.
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] when the page holds no video id.
pub fn extract_playlist(html: &str) -> Result<ScrapedYouTubePlaylist> {
    let video_ids = extract_video_ids(html);
    if video_ids.is_empty() {
        return Err(ConvertError::Parse(
            "no videos found in playlist page".to_string(),
        ));
    }

    Ok(ScrapedYouTubePlaylist {
        name: extract_name(html),
        video_ids,
    })
}

/// Fetches a playlist page through the relays and extracts it.
pub async fn fetch_playlist(
    relay: &RelayClient,
    base_url: &str,
    list_id: &str,
) -> Result<ScrapedYouTubePlaylist> {
    let html = relay.fetch(&playlist_url(base_url, list_id)).await?;
    extract_playlist(&html)
}
