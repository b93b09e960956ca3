use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PendingAuth {
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTracksResponse {
    pub items: Vec<SavedTrackItem>,
    pub total: u64,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrackItem {
    pub added_at: String,
    pub track: TrackObject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub artists: Vec<SimplifiedArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrack {
    pub id: String,
    pub name: String,
    pub added_at: String,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralArtistsResponse {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub public: Option<bool>,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub artists: usize,
}
