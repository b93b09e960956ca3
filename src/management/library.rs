use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    spotify,
    types::{Artist, SavedTrack},
    utils,
};

pub struct LibraryManager {
    tracks: Vec<SavedTrack>,
    artists: Vec<Artist>,
}

impl LibraryManager {
    pub async fn fetch(token: &str) -> Result<Self, reqwest::Error> {
        let pb = ProgressBar::new_spinner();
        pb.set_message("Loading saved tracks...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        let mut tracks: Vec<SavedTrack> = Vec::new();
        let mut offset: u64 = 0;
        // real total comes from the first page
        let mut total: u64 = spotify::tracks::SAVED_TRACKS_PAGE_SIZE;

        while offset < total {
            let page = match spotify::tracks::get_saved_tracks_page(
                token,
                spotify::tracks::SAVED_TRACKS_PAGE_SIZE,
                offset,
            )
            .await
            {
                Ok(page) => page,
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            };

            if offset == 0 {
                total = page.total;
            }

            tracks.extend(utils::page_to_saved_tracks(&page.items));
            offset += spotify::tracks::SAVED_TRACKS_PAGE_SIZE;
            pb.set_message(format!("Loading saved tracks... ({}/{})", tracks.len(), total));
        }

        pb.set_message("Loading artist genres...");
        let artist_ids = utils::collect_unique_artist_ids(&tracks);
        let mut artists: Vec<Artist> = Vec::new();

        for chunk in artist_ids.chunks(spotify::artists::ARTIST_BATCH_SIZE) {
            match spotify::artists::get_several_artists(token, chunk).await {
                Ok(batch) => artists.extend(batch),
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            }
            pb.set_message(format!(
                "Loading artist genres... ({}/{})",
                artists.len(),
                artist_ids.len()
            ));
        }

        pb.finish_and_clear();
        Ok(Self { tracks, artists })
    }

    pub fn tracks(&self) -> &[SavedTrack] {
        &self.tracks
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn tracks_with_genres(&self) -> Vec<SavedTrack> {
        let mut tracks = self.tracks.clone();
        utils::update_track_artists(&mut tracks, &self.artists);
        tracks
    }

    pub fn genres(&self) -> Vec<String> {
        utils::collect_genres(&self.artists)
    }

    pub fn count_tracks(&self) -> usize {
        self.tracks.len()
    }

    pub fn count_artists(&self) -> usize {
        self.artists.len()
    }
}
