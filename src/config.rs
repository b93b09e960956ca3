//! Configuration management for the genre playlist CLI.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! dotenv file in the local data directory. Lookup order:
//!
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Credentials are collected interactively on the first run and written to
//! the `.env` file, so a fresh installation starts with no file at all.
//! Loading therefore tolerates a missing file instead of failing.

use dotenv;
use std::{
    env,
    path::{Path, PathBuf},
};

/// Default scope set requested during OAuth authorization.
const DEFAULT_SCOPE: &str = "streaming user-read-email user-read-private user-library-read playlist-modify-private playlist-modify-public";

/// Returns the path of the `.env` file in the local data directory.
///
/// The file lives in the platform-specific local data directory under
/// `spoplcli/.env`:
/// - Linux: `~/.local/share/spoplcli/.env`
/// - macOS: `~/Library/Application Support/spoplcli/.env`
/// - Windows: `%LOCALAPPDATA%/spoplcli/.env`
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spoplcli/.env");
    path
}

/// Loads environment variables from the `.env` file in the local data directory.
///
/// Creates the directory structure when needed and feeds the file returned
/// by [`env_file_path`] to the dotenv loader. A missing file is not an
/// error: on a fresh installation the credentials are prompted for and the
/// file is written during the first authorization.
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded or absent,
/// or an error string if directory creation or file parsing fails.
pub async fn load_env() -> Result<(), String> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.exists() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Writes the application credentials to the given `.env` file.
///
/// Stores the client ID, client secret, and redirect URI collected during the
/// first-run setup so subsequent runs can authenticate without prompting.
/// Overwrites any existing file content; the refresh token is appended later
/// by [`append_refresh_token`] once the authorization flow completes.
///
/// # Arguments
///
/// * `path` - Destination `.env` file (normally [`env_file_path`])
/// * `client_id` - Spotify application client ID
/// * `client_secret` - Spotify application client secret
/// * `redirect_uri` - Registered OAuth redirect URI
pub async fn store_credentials(
    path: &Path,
    client_id: &str,
    client_secret: &str,
    redirect_uri: &str,
) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let content = format!(
        "SPOTIFY_API_AUTH_CLIENT_ID={}\nSPOTIFY_API_AUTH_CLIENT_SECRET={}\nSPOTIFY_API_REDIRECT_URI={}\n",
        client_id, client_secret, redirect_uri
    );
    async_fs::write(path, content)
        .await
        .map_err(|e| e.to_string())
}

/// Appends a refresh token to the given `.env` file.
///
/// Any previously stored `SPOTIFY_API_REFRESH_TOKEN` line is removed first.
/// The dotenv loader honors the first occurrence of a key, so leaving a stale
/// line in place would shadow the new token on the next run.
///
/// # Arguments
///
/// * `path` - The `.env` file to update (normally [`env_file_path`])
/// * `refresh_token` - The refresh token returned by the token exchange
pub async fn append_refresh_token(path: &Path, refresh_token: &str) -> Result<(), String> {
    let existing = if path.exists() {
        async_fs::read_to_string(path)
            .await
            .map_err(|e| e.to_string())?
    } else {
        String::new()
    };

    let mut lines: Vec<&str> = existing
        .lines()
        .filter(|line| !line.starts_with("SPOTIFY_API_REFRESH_TOKEN="))
        .collect();
    let token_line = format!("SPOTIFY_API_REFRESH_TOKEN={}", refresh_token);
    lines.push(&token_line);

    let content = format!("{}\n", lines.join("\n"));
    async_fs::write(path, content)
        .await
        .map_err(|e| e.to_string())
}

/// Returns the bind address for the local landing server.
///
/// Read from `SERVER_ADDRESS`; defaults to `127.0.0.1:8080`, matching the
/// default redirect URI.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| String::from("127.0.0.1:8080"))
}

/// Returns the Spotify application client ID, if configured.
///
/// `None` means the first-run setup has not happened yet and the
/// authorization flow should prompt for credentials.
pub fn spotify_client_id() -> Option<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").ok()
}

/// Returns the Spotify application client secret, if configured.
///
/// The secret stays in the `.env` file under the data directory; it is
/// never logged.
pub fn spotify_client_secret() -> Option<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").ok()
}

/// Returns the stored OAuth refresh token, if any.
///
/// Written to the `.env` file by the first successful authorization. `None`
/// means the interactive authorization flow has to run before any API call
/// can be made.
pub fn spotify_refresh_token() -> Option<String> {
    env::var("SPOTIFY_API_REFRESH_TOKEN").ok()
}

/// Returns the OAuth redirect URI.
///
/// Must match a redirect URI registered in the application settings.
/// Defaults to the local callback route served by [`crate::server`].
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI")
        .unwrap_or_else(|_| String::from("http://localhost:8080/callback"))
}

/// Returns the scope set requested during authorization.
///
/// The default covers library reading and playlist modification, which is
/// everything the playlist pipeline needs.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|_| String::from(DEFAULT_SCOPE))
}

/// Returns the base URL of the authorization (consent page) endpoint.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| String::from("https://accounts.spotify.com/authorize"))
}

/// Returns the base URL of the Spotify Web API.
///
/// Overriding `SPOTIFY_API_URL` lets tests point every API call at a local
/// mock server.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| String::from("https://api.spotify.com/v1"))
}

/// Returns the URL of the token exchange endpoint.
///
/// Used both for the initial code exchange and for refresh-token exchanges
/// on subsequent runs.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| String::from("https://accounts.spotify.com/api/token"))
}
