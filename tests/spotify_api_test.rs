use std::env;
use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::json;
use tokio::sync::Mutex;
use wiremock::matchers::{body_string_contains, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use spoplcli::management::LibraryManager;
use spoplcli::spotify;

// Endpoint overrides are process-global environment variables. Every test
// that points them at a mock server holds this lock for its full duration.
static ENV_LOCK: Mutex<()> = Mutex::const_new(());

fn set_env(key: &str, value: &str) {
    // caller holds ENV_LOCK
    unsafe { env::set_var(key, value) };
}

// Helper function to build one saved tracks page as the API returns it
fn saved_tracks_page(offset: u64, page_len: u64, total: u64) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (offset..offset + page_len)
        .map(|n| {
            json!({
                "added_at": format!("2023-10-01T00:{:02}:{:02}Z", n / 60, n % 60),
                "track": {
                    "id": format!("t{}", n),
                    "name": format!("Track {}", n),
                    "artists": [
                        {"id": "a1", "name": "Artist One"},
                        {"id": "a2", "name": "Artist Two"}
                    ]
                }
            })
        })
        .collect();

    json!({
        "items": items,
        "total": total,
        "limit": 50,
        "offset": offset,
        "next": null
    })
}

#[tokio::test]
async fn test_library_fetch_paginates_in_fixed_windows() {
    let _env = ENV_LOCK.lock().await;
    let server = MockServer::start().await;
    set_env("SPOTIFY_API_URL", &server.uri());

    // 120 saved tracks come back in exactly three windows of 50
    for offset in [0u64, 50, 100] {
        let page_len = if offset == 100 { 20 } else { 50 };
        Mock::given(method("GET"))
            .and(path("/me/tracks"))
            .and(query_param("limit", "50"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(saved_tracks_page(offset, page_len, 120)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    // Both artists appear on every track but are looked up once
    Mock::given(method("GET"))
        .and(path("/artists"))
        .and(query_param("ids", "a1,a2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": [
                {"id": "a1", "name": "Artist One", "genres": ["rock"]},
                {"id": "a2", "name": "Artist Two", "genres": ["ambient", "rock"]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let library = LibraryManager::fetch("test-token").await.unwrap();

    // All pages land in the library
    assert_eq!(library.count_tracks(), 120);
    assert_eq!(library.count_artists(), 2);

    // The genre list is deduplicated and sorted
    assert_eq!(library.genres(), vec!["ambient", "rock"]);

    // Genre annotations reach the artist references on the tracks
    let tracks = library.tracks_with_genres();
    assert_eq!(tracks[0].artists[0].genres, vec!["rock"]);
    assert_eq!(tracks[0].artists[1].genres, vec!["ambient", "rock"]);
}

#[tokio::test]
async fn test_library_fetch_empty_library() {
    let _env = ENV_LOCK.lock().await;
    let server = MockServer::start().await;
    set_env("SPOTIFY_API_URL", &server.uri());

    // With nothing saved the first page already settles the total
    Mock::given(method("GET"))
        .and(path("/me/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(saved_tracks_page(0, 0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let library = LibraryManager::fetch("test-token").await.unwrap();

    // No tracks, so no artist lookups either
    assert_eq!(library.count_tracks(), 0);
    assert_eq!(library.count_artists(), 0);
    assert!(library.genres().is_empty());
}

#[tokio::test]
async fn test_add_tracks_batched_stops_on_failed_batch() {
    let _env = ENV_LOCK.lock().await;
    let server = MockServer::start().await;
    set_env("SPOTIFY_API_URL", &server.uri());

    let batch = AtomicU32::new(0);

    // First batch succeeds, second fails, a third must never be sent
    Mock::given(method("POST"))
        .and(path("/playlists/p1/tracks"))
        .respond_with(move |_: &Request| {
            let n = batch.fetch_add(1, Ordering::SeqCst);
            if n == 0 {
                ResponseTemplate::new(201).set_body_json(json!({"snapshot_id": "snap1"}))
            } else {
                ResponseTemplate::new(500)
            }
        })
        .expect(2)
        .mount(&server)
        .await;

    let uris: Vec<String> = (0..120).map(|n| format!("spotify:track:t{}", n)).collect();
    let added = spotify::playlist::add_tracks_batched("test-token", "p1", &uris).await;

    // Only the first full batch made it in
    assert_eq!(added, 50);
}

#[tokio::test]
async fn test_add_tracks_batched_adds_all_batches() {
    let _env = ENV_LOCK.lock().await;
    let server = MockServer::start().await;
    set_env("SPOTIFY_API_URL", &server.uri());

    // 60 URIs split into a full batch and a remainder batch
    Mock::given(method("POST"))
        .and(path("/playlists/p1/tracks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"snapshot_id": "snap1"})))
        .expect(2)
        .mount(&server)
        .await;

    let uris: Vec<String> = (0..60).map(|n| format!("spotify:track:t{}", n)).collect();
    let added = spotify::playlist::add_tracks_batched("test-token", "p1", &uris).await;

    assert_eq!(added, 60);
}

#[tokio::test]
async fn test_exchange_code_returns_token() {
    let _env = ENV_LOCK.lock().await;
    let server = MockServer::start().await;
    set_env(
        "SPOTIFY_API_TOKEN_URL",
        &format!("{}/api/token", server.uri()),
    );

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header_exists("authorization"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh-access-token",
            "refresh_token": "fresh-refresh-token",
            "scope": "user-library-read",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = spotify::auth::exchange_code("client-id", "client-secret", "auth-code")
        .await
        .unwrap();

    assert_eq!(token.access_token, "fresh-access-token");
    assert_eq!(token.refresh_token, "fresh-refresh-token");
    assert_eq!(token.expires_in, 3600);

    // The obtained timestamp is stamped at exchange time
    assert!(token.obtained_at > 0);
}

#[tokio::test]
async fn test_exchange_code_error_includes_response_body() {
    let _env = ENV_LOCK.lock().await;
    let server = MockServer::start().await;
    set_env(
        "SPOTIFY_API_TOKEN_URL",
        &format!("{}/api/token", server.uri()),
    );

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid authorization code"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = spotify::auth::exchange_code("client-id", "client-secret", "expired-code").await;

    // The status and the API's explanation both surface in the message
    let err = result.unwrap_err();
    assert!(err.contains("400"));
    assert!(err.contains("invalid_grant"));
}

#[tokio::test]
async fn test_refresh_access_token_keeps_current_refresh_token() {
    let _env = ENV_LOCK.lock().await;
    let server = MockServer::start().await;
    set_env(
        "SPOTIFY_API_TOKEN_URL",
        &format!("{}/api/token", server.uri()),
    );
    set_env("SPOTIFY_API_AUTH_CLIENT_ID", "client-id");
    set_env("SPOTIFY_API_AUTH_CLIENT_SECRET", "client-secret");

    // The accounts service did not rotate the refresh token
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "rotated-access-token",
            "scope": "user-library-read",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = spotify::auth::refresh_access_token("stored-refresh-token")
        .await
        .unwrap();

    assert_eq!(token.access_token, "rotated-access-token");

    // The stored refresh token stays valid for the next run
    assert_eq!(token.refresh_token, "stored-refresh-token");
}

#[tokio::test]
async fn test_get_current_user() {
    let _env = ENV_LOCK.lock().await;
    let server = MockServer::start().await;
    set_env("SPOTIFY_API_URL", &server.uri());

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user1",
            "display_name": "Test Listener"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profile = spotify::user::get_current_user("test-token").await.unwrap();

    assert_eq!(profile.id, "user1");
    assert_eq!(profile.display_name.as_deref(), Some("Test Listener"));
}
