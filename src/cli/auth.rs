use std::sync::Arc;

use crate::{
    config, error, info,
    management::TokenManager,
    server, spotify, success,
    types::{PendingAuth, Token},
    utils, warning,
};

use super::prompt;

pub async fn auth() {
    interactive_authorize().await;
    success!("Authentication successful!");
}

/// Returns a usable access token, authorizing interactively when needed.
///
/// With a stored refresh token this is a single silent token exchange; a
/// failed exchange is fatal. Without one the full interactive flow runs,
/// including the first-run credential setup.
pub(crate) async fn bootstrap_token() -> Token {
    if config::spotify_refresh_token().is_some() {
        match TokenManager::obtain().await {
            Ok(manager) => return manager.current_token().clone(),
            Err(e) => error!("Failed to refresh the access token: {}", e),
        }
    }

    interactive_authorize().await
}

async fn interactive_authorize() -> Token {
    let (client_id, client_secret) = match (
        config::spotify_client_id(),
        config::spotify_client_secret(),
    ) {
        (Some(id), Some(secret)) => (id, secret),
        _ => prompt_for_credentials().await,
    };

    let state = utils::generate_state();
    let pending = Arc::new(PendingAuth {
        state: state.clone(),
    });

    let server_state = Arc::clone(&pending);
    tokio::spawn(async move {
        server::start_landing_server(server_state).await;
    });

    let auth_url = spotify::auth::authorize_url(&client_id, &state);

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        );
    } else {
        info!("A page prompting you to log in to Spotify was opened in your browser.");
    }
    info!("After logging in, enter the code shown on the landing page.");

    let code = match prompt::prompt("Code:") {
        Ok(code) => code,
        Err(e) => error!("Failed to read the authorization code: {}", e),
    };

    let token = match spotify::auth::exchange_code(&client_id, &client_secret, &code).await {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let env_path = config::env_file_path();
    if let Err(e) = config::append_refresh_token(&env_path, &token.refresh_token).await {
        warning!("Failed to store the refresh token: {}", e);
    }

    token
}

async fn prompt_for_credentials() -> (String, String) {
    info!("First, you will need developer credentials from https://developer.spotify.com/dashboard");
    info!("Create an app there, give it a name and a description, and agree to the terms.");
    info!(
        "Then open its settings, add {} to the redirect URIs, and copy the client ID and secret.",
        config::spotify_redirect_uri()
    );

    let client_id = match prompt::prompt("Enter the Client ID:") {
        Ok(value) => value,
        Err(e) => error!("Failed to read input: {}", e),
    };
    let client_secret = match prompt::prompt("Enter the Client Secret:") {
        Ok(value) => value,
        Err(e) => error!("Failed to read input: {}", e),
    };

    let env_path = config::env_file_path();
    if let Err(e) = config::store_credentials(
        &env_path,
        &client_id,
        &client_secret,
        &config::spotify_redirect_uri(),
    )
    .await
    {
        warning!("Failed to store credentials: {}", e);
    }

    (client_id, client_secret)
}
