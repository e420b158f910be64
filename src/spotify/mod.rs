//! # Spotify Integration Module
//!
//! Spotify playlists carry no YouTube ids, so this module only produces
//! track descriptors (`{title, artist}`) which are matched on YouTube later.
//! There are two ways in:
//!
//! ```text
//! playlist link ──▶ auth (client credentials) ──▶ playlist (Web API, paged)
//! pasted text   ──▶ parser (JSON, then line grammar)
//!          ↓
//!   Vec<TrackDescriptor>
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - Client credentials token exchange. Tokens are never cached.
//! - [`playlist`] - Playlist metadata and full track list through the Web API
//! - [`parser`] - Pasted playlist data, either JSON or `artist - title` lines
//!
//! ## Configuration
//!
//! The Web API path needs `SPOTIFY_API_AUTH_CLIENT_ID` and
//! `SPOTIFY_API_AUTH_CLIENT_SECRET`. The pipeline checks for them before the
//! first request of a run. The parser needs no configuration.

pub mod auth;
pub mod parser;
pub mod playlist;
