use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::SpotifyCredentials,
    error::{ConvertError, Result},
    spotify::auth,
    types::{
        ParsedSpotifyPlaylist, SpotifyPlaylistItem, SpotifyPlaylistResponse, SpotifyTrack,
        SpotifyTrackPage, TrackDescriptor, UNKNOWN_ARTIST,
    },
};

/// Resolves Spotify playlist links through the Web API.
pub struct SpotifyApiResolver<'a> {
    client: &'a Client,
    credentials: &'a SpotifyCredentials,
    api_url: &'a str,
    token_url: &'a str,
}

impl<'a> SpotifyApiResolver<'a> {
    pub fn new(
        client: &'a Client,
        credentials: &'a SpotifyCredentials,
        api_url: &'a str,
        token_url: &'a str,
    ) -> Self {
        Self {
            client,
            credentials,
            api_url,
            token_url,
        }
    }

    /// Fetches name and the complete track list of a playlist.
    ///
    /// A fresh token is requested first. The playlist object carries the
    /// first page of tracks; remaining pages are followed through their
    /// `next` links. Items without a track (removed or local files) are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Any non-success response of the token exchange, the playlist request
    /// or a follow-up page fails the whole resolution.
    pub async fn resolve(&self, playlist_id: &str) -> Result<ParsedSpotifyPlaylist> {
        let token =
            auth::client_credentials_token(self.client, self.token_url, self.credentials).await?;

        let url = format!(
            "{api}/playlists/{id}",
            api = self.api_url.trim_end_matches('/'),
            id = playlist_id
        );
        let playlist: SpotifyPlaylistResponse = self.get_json(&url, &token).await?;

        let mut tracks = map_items(&playlist.tracks.items);
        let mut next = playlist.tracks.next;
        while let Some(page_url) = next {
            let page: SpotifyTrackPage = self.get_json(&page_url, &token).await?;
            tracks.extend(map_items(&page.items));
            next = page.next;
        }

        Ok(ParsedSpotifyPlaylist {
            name: playlist.name,
            tracks,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, token: &str) -> Result<T> {
        let response = self.client.get(url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::Network {
                target: url.to_string(),
                status: Some(status.as_u16()),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

fn map_items(items: &[SpotifyPlaylistItem]) -> Vec<TrackDescriptor> {
    items
        .iter()
        .filter_map(|item| item.track.as_ref())
        .map(to_descriptor)
        .collect()
}

/// Maps an API track, joining several artists with a comma.
pub fn to_descriptor(track: &SpotifyTrack) -> TrackDescriptor {
    let artist = track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if artist.is_empty() {
        TrackDescriptor::new(&track.name, UNKNOWN_ARTIST)
    } else {
        TrackDescriptor::new(&track.name, artist)
    }
}
