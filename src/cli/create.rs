use crate::{
    error, info,
    management::LibraryManager,
    spotify, success,
    types::{CreatePlaylistRequest, SavedTrack},
    utils, warning,
};

use super::{auth, prompt};

pub async fn create(
    genre: Option<String>,
    name: Option<String>,
    description: Option<String>,
    public: bool,
    collaborative: bool,
) {
    let token = auth::bootstrap_token().await;
    let access_token = token.access_token;

    let library = match LibraryManager::fetch(&access_token).await {
        Ok(library) => library,
        Err(e) => error!("Failed to load your saved tracks: {}", e),
    };

    success!(
        "Loaded {} saved tracks by {} artists.",
        library.count_tracks(),
        library.count_artists()
    );

    let user = match spotify::user::get_current_user(&access_token).await {
        Ok(user) => user,
        Err(e) => error!("Failed to fetch the user profile: {}", e),
    };

    let tracks = library.tracks_with_genres();
    let genres = library.genres();
    info!(
        "Found {} genres across your library. Run spoplcli genres to list them.",
        genres.len()
    );

    // flag-driven single round
    if let Some(genre) = genre {
        let name = name.unwrap_or_else(|| format!("{} picks", genre));
        let description =
            description.unwrap_or_else(|| format!("Saved tracks tagged {}, newest first.", genre));
        let request = CreatePlaylistRequest {
            name,
            description,
            // collaborative playlists are always private
            public: public && !collaborative,
            collaborative,
        };

        build_playlist(&access_token, &user.id, &tracks, &genre, request).await;
        return;
    }

    loop {
        let genre = match prompt::prompt("Choose the genre for your playlist:") {
            Ok(genre) => genre,
            Err(e) => error!("Failed to read input: {}", e),
        };

        if genre.is_empty() {
            warning!("No genre entered.");
            continue;
        }

        if !genres.iter().any(|g| g == &genre) {
            warning!("{} does not appear among your library's genres.", genre);
        }

        info!("Now, let's choose the playlist options.");

        let name = match prompt::prompt("What will the playlist name be?") {
            Ok(name) => name,
            Err(e) => error!("Failed to read input: {}", e),
        };
        let description = match prompt::prompt("What will the playlist description be?") {
            Ok(description) => description,
            Err(e) => error!("Failed to read input: {}", e),
        };

        let collaborative = match prompt::prompt_yes_no("Will the playlist be collaborative?", true)
        {
            Ok(collaborative) => collaborative,
            Err(e) => error!("Failed to read input: {}", e),
        };

        let public = if collaborative {
            false
        } else {
            match prompt::prompt_yes_no("Will the playlist be public?", true) {
                Ok(public) => public,
                Err(e) => error!("Failed to read input: {}", e),
            }
        };

        let request = CreatePlaylistRequest {
            name,
            description,
            public,
            collaborative,
        };

        build_playlist(&access_token, &user.id, &tracks, &genre, request).await;

        let another = match prompt::prompt_yes_no("Do you want to create another playlist?", true) {
            Ok(another) => another,
            Err(e) => error!("Failed to read input: {}", e),
        };

        if !another {
            break;
        }
    }
}

async fn build_playlist(
    token: &str,
    user_id: &str,
    tracks: &[SavedTrack],
    genre: &str,
    request: CreatePlaylistRequest,
) {
    let mut filtered = utils::filter_tracks_by_genre(tracks, genre);

    if filtered.is_empty() {
        warning!("No saved tracks matched the genre {}.", genre);
        return;
    }

    utils::sort_tracks_by_added_at(&mut filtered);
    let uris = utils::track_uris(&filtered);

    let playlist = match spotify::playlist::create(token, user_id, &request).await {
        Ok(playlist) => playlist,
        Err(e) => error!("Failed to create the playlist: {}", e),
    };

    info!("Adding {} tracks to {}...", uris.len(), playlist.name);
    let added = spotify::playlist::add_tracks_batched(token, &playlist.id, &uris).await;

    if added == uris.len() {
        success!("The playlist was created! Check your Spotify.");
    }
}
