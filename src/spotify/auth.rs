use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token};

/// Builds the Spotify authorization URL for the consent step.
///
/// Constructs the URL the user visits to grant the requested scope to the
/// application. The scope comes from the configuration with spaces encoded
/// as `%20`, and the `state` value is echoed back by Spotify on the redirect
/// so the callback handler can reject responses it did not initiate.
///
/// # Arguments
///
/// * `client_id` - Spotify application client ID
/// * `state` - Random token tying the redirect to this authorization attempt
///
/// # Example
///
/// ```
/// let url = authorize_url("abc123", "x9f2k1");
/// // https://accounts.spotify.com/authorize?client_id=abc123&response_type=code&...
/// ```
pub fn authorize_url(client_id: &str, state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&state={state}&scope={scope}",
        auth_url = &config::spotify_apiauth_url(),
        client_id = client_id,
        redirect_uri = &config::spotify_redirect_uri(),
        state = state,
        scope = &config::spotify_scope().replace(' ', "%20")
    )
}

/// Exchanges an authorization code for an access token.
///
/// Completes the OAuth 2.0 authorization code flow by posting the code to
/// the token endpoint with HTTP basic authentication (client ID and secret).
/// This is the final step of the first-run authentication process; the
/// returned token carries the refresh token that later runs use.
///
/// # Arguments
///
/// * `client_id` - Spotify application client ID
/// * `client_secret` - Spotify application client secret
/// * `code` - Authorization code shown on the landing page after consent
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Complete token with access token, refresh token, and metadata
/// - `Err(String)` - Error message including the HTTP status and response body
///
/// # Error Handling
///
/// Any non-2xx response is an error. The accounts service explains failures
/// in the response body (expired code, redirect URI mismatch, bad
/// credentials), so the body is folded into the error message for the CLI
/// to print.
///
/// # Example
///
/// ```
/// let token = exchange_code("abc123", "shh", "AQA...auth_code").await?;
/// println!("Access token: {}", token.access_token);
/// ```
pub async fn exchange_code(
    client_id: &str,
    client_secret: &str,
    code: &str,
) -> Result<Token, String> {
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(client_id, Some(client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(format!("Token exchange failed ({}): {}", status, body));
    }

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Exchanges a refresh token for a new access token.
///
/// Used on every run after the first: the refresh token stored in the
/// configuration file is traded for a fresh access token without any user
/// interaction. Like [`exchange_code`], the request authenticates with the
/// client ID and secret via HTTP basic authentication.
///
/// # Arguments
///
/// * `refresh_token` - Refresh token obtained from a previous authorization
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - New token with a fresh access token
/// - `Err(String)` - Error message including the HTTP status and response body
///
/// # Token Rotation
///
/// The accounts service may or may not rotate the refresh token. When the
/// response omits `refresh_token`, the one used for the request is kept so
/// the stored value stays usable.
///
/// # Example
///
/// ```
/// let token = refresh_access_token("AQC...refresh_token").await?;
/// println!("New token expires in {} seconds", token.expires_in);
/// ```
pub async fn refresh_access_token(refresh_token: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()
        .ok_or_else(|| String::from("SPOTIFY_API_AUTH_CLIENT_ID is not configured"))?;
    let client_secret = config::spotify_client_secret()
        .ok_or_else(|| String::from("SPOTIFY_API_AUTH_CLIENT_SECRET is not configured"))?;

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .basic_auth(&client_id, Some(&client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(format!("Token refresh failed ({}): {}", status, body));
    }

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or(refresh_token)
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
