use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::time::sleep;

use crate::{
    config,
    types::{
        AddTracksToPlaylistRequest, AddTracksToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse,
    },
    warning,
};

/// Maximum number of track URIs accepted per add-tracks request.
pub const TRACK_BATCH_SIZE: usize = 50;

/// Pause inserted before every add-tracks batch to stay clear of rate limits.
const BATCH_DELAY: Duration = Duration::from_millis(1000);

/// Creates a new playlist for the given user.
///
/// Posts the playlist metadata to the user-scoped playlist endpoint. The
/// caller decides name, description, and the public/collaborative flags;
/// a collaborative playlist must be private, which the CLI layer enforces
/// before building the request.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `user_id` - ID of the user the playlist belongs to
/// * `request` - Playlist metadata
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - The created playlist, including its ID
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn create(
    token: &str,
    user_id: &str,
    request: &CreatePlaylistRequest,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Adds a single batch of track URIs to a playlist.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - ID of the playlist to add to
/// * `uris` - Track URIs (at most [`TRACK_BATCH_SIZE`])
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(AddTracksToPlaylistResponse)` - The new playlist snapshot ID
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTracksToPlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let request = AddTracksToPlaylistRequest { uris };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksToPlaylistResponse>().await
}

/// Adds track URIs to a playlist in batches of [`TRACK_BATCH_SIZE`].
///
/// Waits [`BATCH_DELAY`] before each request, including the first, to keep
/// the call rate down. On the first failed batch the loop stops and a
/// generic warning is printed; batches that already succeeded stay in the
/// playlist and nothing is rolled back.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - ID of the playlist to fill
/// * `uris` - All track URIs to add, in playlist order
///
/// # Returns
///
/// The number of tracks actually added. Equal to `uris.len()` when every
/// batch succeeded.
pub async fn add_tracks_batched(token: &str, playlist_id: &str, uris: &[String]) -> usize {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut added = 0;
    for chunk in uris.chunks(TRACK_BATCH_SIZE) {
        pb.set_message(format!("Adding tracks... ({}/{})", added, uris.len()));
        sleep(BATCH_DELAY).await;

        match add_tracks(token, playlist_id, chunk.to_vec()).await {
            Ok(_) => added += chunk.len(),
            Err(_) => {
                pb.finish_and_clear();
                warning!("An error occurred while creating the playlist...");
                return added;
            }
        }
    }

    pb.finish_and_clear();
    added
}
