use reqwest::Client;

use crate::{
    config,
    types::{Artist, GetSeveralArtistsResponse},
};

/// Maximum number of artist IDs the batch lookup endpoint accepts per call.
pub const ARTIST_BATCH_SIZE: usize = 50;

/// Retrieves full artist records for a batch of artist IDs.
///
/// Fetches complete artist objects, including the genre lists the playlist
/// pipeline needs, for up to [`ARTIST_BATCH_SIZE`] IDs in a single request.
/// The IDs are joined with commas into the `ids` query parameter.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `ids` - Artist IDs to look up (at most [`ARTIST_BATCH_SIZE`])
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Artist>)` - Full artist records in request order
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Example
///
/// ```
/// let ids = vec!["4NHQUGzhtTLFvgF5SZesLK".to_string()];
/// let artists = get_several_artists(&token, &ids).await?;
/// println!("{} genres", artists[0].genres.len());
/// ```
pub async fn get_several_artists(
    token: &str,
    ids: &[String],
) -> Result<Vec<Artist>, reqwest::Error> {
    let artist_ids = ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{uri}/artists?ids={ids}",
        uri = &config::spotify_apiurl(),
        ids = artist_ids
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let json = response.json::<GetSeveralArtistsResponse>().await?;

    Ok(json.artists)
}
