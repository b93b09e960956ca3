use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{config, types::SavedTracksResponse};

/// Page size used when walking the saved-tracks library.
///
/// This is the maximum the API accepts for the `/me/tracks` endpoint.
pub const SAVED_TRACKS_PAGE_SIZE: u64 = 50;

/// Retrieves one page of the user's saved tracks from the Spotify Web API.
///
/// Fetches a fixed-size window of the library at the given offset. The
/// response carries the overall `total`, which callers use to decide how
/// many further pages to request.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of items to return (1-50)
/// * `offset` - Index of the first item to return
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(SavedTracksResponse)` - Page items plus pagination metadata
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Example
///
/// ```
/// let page = get_saved_tracks_page(&token, 50, 0).await?;
/// println!("{} of {} tracks", page.items.len(), page.total);
/// ```
pub async fn get_saved_tracks_page(
    token: &str,
    limit: u64,
    offset: u64,
) -> Result<SavedTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/tracks?limit={limit}&offset={offset}",
        uri = &config::spotify_apiurl(),
        limit = limit,
        offset = offset
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<SavedTracksResponse>().await
}

/// Retrieves the total number of saved tracks in the user's library.
///
/// Makes a minimal request with `limit=1` to read the total from the
/// response metadata without transferring the library itself. Displays a
/// spinner while the request is in progress.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(u64)` - Total number of saved tracks
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Example
///
/// ```
/// let total = get_saved_track_total(&token).await?;
/// println!("You saved {} tracks", total);
/// ```
pub async fn get_saved_track_total(token: &str) -> Result<u64, reqwest::Error> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching saved track count...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = get_saved_tracks_page(token, 1, 0).await;
    pb.finish_and_clear();

    Ok(result?.total)
}
