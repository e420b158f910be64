//! Configuration management for the playlist converter.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Values are read once into
//! [`Settings`], which is handed to the pipeline at construction time so no
//! component reads the environment in the middle of a run.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (relays and search delay only)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::error::{ConvertError, Result};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.youtube.com";
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Relay endpoints tried in order when no other list is configured.
pub const DEFAULT_RELAYS: [&str; 3] = [
    "https://corsproxy.io/?{encoded_url}",
    "https://api.codetabs.com/v1/proxy?quest={encoded_url}",
    "https://cors-anywhere.herokuapp.com/{url}",
];

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up at `pipedport/.env` below the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/pipedport/.env`
/// - macOS: `~/Library/Application Support/pipedport/.env`
/// - Windows: `%LOCALAPPDATA%/pipedport/.env`
///
/// A missing file is not an error since every value has a default or is only
/// needed for Spotify links.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pipedport/.env");
    path
}

/// Returns the Spotify API client ID, if configured.
///
/// Read from `SPOTIFY_API_AUTH_CLIENT_ID`.
pub fn spotify_client_id() -> Option<String> {
    non_empty_var("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret, if configured.
///
/// Read from `SPOTIFY_API_AUTH_CLIENT_SECRET`. The secret is never logged.
pub fn spotify_client_secret() -> Option<String> {
    non_empty_var("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL.
///
/// Read from `SPOTIFY_API_URL`, defaulting to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    non_empty_var("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Read from `SPOTIFY_API_TOKEN_URL`, defaulting to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    non_empty_var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|| DEFAULT_SPOTIFY_TOKEN_URL.to_string())
}

/// Returns the YouTube base URL used for playlist pages and searches.
pub fn youtube_base_url() -> String {
    non_empty_var("YOUTUBE_BASE_URL").unwrap_or_else(|| DEFAULT_YOUTUBE_BASE_URL.to_string())
}

/// Returns the ordered relay endpoint templates.
///
/// Read from `PIPEDPORT_RELAYS` as a comma-separated list. Each template
/// contains `{url}` or `{encoded_url}` where the target goes.
pub fn relay_templates() -> Vec<String> {
    match non_empty_var("PIPEDPORT_RELAYS") {
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        None => DEFAULT_RELAYS.iter().map(|t| t.to_string()).collect(),
    }
}

/// Returns the pause between two consecutive YouTube searches.
pub fn search_delay() -> Duration {
    let millis = non_empty_var("PIPEDPORT_SEARCH_DELAY_MS")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEARCH_DELAY_MS);
    Duration::from_millis(millis)
}

/// Returns the timeout applied to every single HTTP request.
pub fn request_timeout() -> Duration {
    let secs = non_empty_var("PIPEDPORT_REQUEST_TIMEOUT_SECS")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Client credentials for the Spotify Web API.
#[derive(Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Everything a pipeline run needs from its environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub spotify_credentials: Option<SpotifyCredentials>,
    pub spotify_api_url: String,
    pub spotify_token_url: String,
    pub youtube_base_url: String,
    pub relays: Vec<String>,
    pub search_delay: Duration,
    pub request_timeout: Duration,
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spotify_credentials: None,
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            spotify_token_url: DEFAULT_SPOTIFY_TOKEN_URL.to_string(),
            youtube_base_url: DEFAULT_YOUTUBE_BASE_URL.to_string(),
            relays: DEFAULT_RELAYS.iter().map(|t| t.to_string()).collect(),
            search_delay: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            show_progress: false,
        }
    }
}

impl Settings {
    /// Builds settings from the current process environment.
    ///
    /// Credentials are only kept when both the client ID and the secret are
    /// present; a half-configured pair is treated as missing.
    pub fn from_env() -> Self {
        let spotify_credentials = match (spotify_client_id(), spotify_client_secret()) {
            (Some(client_id), Some(client_secret)) => Some(SpotifyCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        Self {
            spotify_credentials,
            spotify_api_url: spotify_apiurl(),
            spotify_token_url: spotify_apitoken_url(),
            youtube_base_url: youtube_base_url(),
            relays: relay_templates(),
            search_delay: search_delay(),
            request_timeout: request_timeout(),
            show_progress: true,
        }
    }

    /// Returns the Spotify credentials or a configuration error naming the
    /// missing variables.
    pub fn require_spotify_credentials(&self) -> Result<&SpotifyCredentials> {
        self.spotify_credentials.as_ref().ok_or_else(|| {
            ConvertError::Config(
                "Spotify links need SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET"
                    .to_string(),
            )
        })
    }
}
