use reqwest::Client;

use crate::{
    config::SpotifyCredentials,
    error::{ConvertError, Result},
    types::TokenResponse,
};

/// Exchanges client credentials for a bearer token.
///
/// Performs the OAuth 2.0 client credentials grant against the Spotify token
/// endpoint, authenticating with HTTP Basic using the client ID and secret.
/// The token is not cached: every playlist resolution calls this again.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `token_url` - Token endpoint, usually `https://accounts.spotify.com/api/token`
/// * `credentials` - Client ID and secret of the registered application
///
/// # Returns
///
/// Returns the access token string on success.
///
/// # Errors
///
/// - [`ConvertError::Network`] when the endpoint answers with a non-success status
/// - [`ConvertError::Http`] on transport or decoding failures
/// - [`ConvertError::Parse`] when the response carries an empty token
///
/// # Example
///
/// ```
/// let token = client_credentials_token(&client, &settings.spotify_token_url, creds).await?;
/// ```
pub async fn client_credentials_token(
    client: &Client,
    token_url: &str,
    credentials: &SpotifyCredentials,
) -> Result<String> {
    let response = client
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ConvertError::Network {
            target: token_url.to_string(),
            status: Some(status.as_u16()),
        });
    }

    let token = response.json::<TokenResponse>().await?;
    if token.access_token.is_empty() {
        return Err(ConvertError::Parse(
            "token endpoint returned an empty access token".to_string(),
        ));
    }

    Ok(token.access_token)
}
