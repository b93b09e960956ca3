use std::collections::{BTreeSet, HashSet};

use rand::{Rng, distr::Alphanumeric};

use crate::types::{Artist, SavedTrack, SavedTrackItem, SimplifiedArtist};

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn simplify_artists(artists: &[SimplifiedArtist]) -> Vec<Artist> {
    artists
        .iter()
        .map(|artist| Artist {
            id: artist.id.clone(),
            name: artist.name.clone(),
            genres: Vec::new(),
        })
        .collect()
}

pub fn page_to_saved_tracks(items: &[SavedTrackItem]) -> Vec<SavedTrack> {
    items
        .iter()
        .map(|item| SavedTrack {
            id: item.track.id.clone(),
            name: item.track.name.clone(),
            added_at: item.added_at.clone(),
            artists: simplify_artists(&item.track.artists),
        })
        .collect()
}

pub fn collect_unique_artist_ids(tracks: &[SavedTrack]) -> Vec<String> {
    let mut seen_ids = HashSet::new();
    let mut ids = Vec::new();
    for track in tracks {
        for artist in &track.artists {
            if seen_ids.insert(artist.id.clone()) {
                ids.push(artist.id.clone());
            }
        }
    }
    ids
}

pub fn update_track_artists(tracks: &mut [SavedTrack], artists: &[Artist]) {
    for track in tracks.iter_mut() {
        for artist in track.artists.iter_mut() {
            // unmatched references stay as they are
            if let Some(full) = artists.iter().find(|full| full.id == artist.id) {
                *artist = full.clone();
            }
        }
    }
}

pub fn collect_genres(artists: &[Artist]) -> Vec<String> {
    let mut genres = BTreeSet::new();
    for artist in artists {
        for genre in &artist.genres {
            genres.insert(genre.clone());
        }
    }
    genres.into_iter().collect()
}

pub fn filter_tracks_by_genre(tracks: &[SavedTrack], genre: &str) -> Vec<SavedTrack> {
    tracks
        .iter()
        .filter(|track| {
            track
                .artists
                .iter()
                .any(|artist| artist.genres.iter().any(|g| g == genre))
        })
        .cloned()
        .collect()
}

pub fn sort_tracks_by_added_at(tracks: &mut Vec<SavedTrack>) {
    tracks.sort_by(|a, b| b.added_at.cmp(&a.added_at));
}

pub fn track_uris(tracks: &[SavedTrack]) -> Vec<String> {
    tracks
        .iter()
        .map(|track| format!("spotify:track:{}", track.id))
        .collect()
}
