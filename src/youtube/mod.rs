//! # YouTube Module
//!
//! Scraping side of the converter. YouTube offers no keyless API for
//! playlists, so both operations read public pages fetched through
//! [`crate::relay::RelayClient`]:
//!
//! - [`playlist`] - Name and ordered distinct video ids of a playlist page
//! - [`search`] - First video of a search results page, used to resolve
//!   Spotify tracks to YouTube videos
//!
//! All extraction goes through [`crate::extract::PatternChain`] so a markup
//! change means adding a pattern, not touching the callers.

pub mod playlist;
pub mod search;
