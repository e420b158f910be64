//! Fetch-with-fallback over an ordered list of relay endpoints.
//!
//! Third-party pages are fetched through relays that forward the request to
//! the real target. Relays come and go, so every fetch walks the configured
//! list in order and stops at the first successful response:
//!
//! ```text
//! relay 1 ──✗──▶ relay 2 ──✗──▶ relay 3 ──✓──▶ body
//! ```
//!
//! There is no racing, retry with backoff or caching. A template containing
//! only `{url}` with nothing else acts as a direct fetch.

use std::time::Duration;

use reqwest::Client;

use crate::{
    error::{ConvertError, Result},
    utils, warning,
};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Builds the HTTP client shared by every component of a run.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

/// Fetches targets through an ordered list of relay templates.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    relays: Vec<String>,
}

impl RelayClient {
    pub fn new(client: Client, relays: Vec<String>) -> Self {
        Self { client, relays }
    }

    /// Fetches `target` and returns the body of the first successful response.
    ///
    /// Relays are tried one after another. A transport failure or a
    /// non-success status moves on to the next relay. Once a relay succeeds
    /// no further relay is contacted.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Network`] when every relay failed. Its status
    /// is the last HTTP status seen, or `None` if no relay answered at all.
    pub async fn fetch(&self, target: &str) -> Result<String> {
        let mut last_status: Option<u16> = None;

        for (index, template) in self.relays.iter().enumerate() {
            let relay_url = utils::fill_relay_template(template, target);

            let response = match self.client.get(&relay_url).send().await {
                Ok(response) => response,
                Err(e) => {
                    warning!("Relay {} unreachable: {}", index + 1, e);
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                warning!("Relay {} answered with {}", index + 1, status);
                last_status = Some(status.as_u16());
                continue;
            }

            match response.text().await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    warning!("Relay {} response could not be read: {}", index + 1, e);
                    last_status = Some(status.as_u16());
                }
            }
        }

        Err(ConvertError::Network {
            target: target.to_string(),
            status: last_status,
        })
    }
}
