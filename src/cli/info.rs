use crate::{error, info, management::TokenManager, spotify, warning};

/// Displays information about the authenticated account and library.
///
/// Accepts boolean flags to determine what to show and returns after the
/// first match:
///
/// 1. `--user` - ID and display name of the authenticated user
/// 2. `--library` - Total number of saved tracks
///
/// Called without either flag, the command prints a usage hint and returns
/// before contacting the API.
///
/// Both queries need a valid token; a missing or unusable refresh token
/// terminates with a message directing the user to `spoplcli auth`.
///
/// # Output Examples
///
/// **User:**
/// ```text
/// [o] User ID: wizzler
/// [o] Display name: Jay
/// ```
///
/// **Library:**
/// ```text
/// [o] Saved tracks: 1432
/// ```
pub async fn info(user: bool, library: bool) {
    if !user && !library {
        warning!("Nothing to show. Use --user or --library.");
        return;
    }

    let token_mgr = match TokenManager::obtain().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to obtain a token. Please run spoplcli auth\n Error: {}",
                e
            );
        }
    };

    if user {
        let profile = match spotify::user::get_current_user(token_mgr.access_token()).await {
            Ok(profile) => profile,
            Err(e) => error!("Failed to fetch the user profile: {}", e),
        };

        info!("User ID: {}", profile.id);
        info!(
            "Display name: {}",
            profile.display_name.unwrap_or_else(|| String::from("(none)"))
        );
        return;
    }

    if library {
        let total = match spotify::tracks::get_saved_track_total(token_mgr.access_token()).await {
            Ok(total) => total,
            Err(e) => error!("Failed to fetch the saved track count: {}", e),
        };

        info!("Saved tracks: {}", total);
    }
}
