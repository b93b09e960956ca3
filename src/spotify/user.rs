use reqwest::Client;

use crate::{config, types::UserProfile};

/// Retrieves the profile of the user the access token belongs to.
///
/// The user ID from the profile is required for playlist creation, which
/// posts to a user-scoped endpoint.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(UserProfile)` - The user's ID and display name
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn get_current_user(token: &str) -> Result<UserProfile, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<UserProfile>().await
}
