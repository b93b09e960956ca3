use spoplcli::config;
use tempfile::tempdir;

#[test]
fn test_env_file_path_location() {
    let path = config::env_file_path();

    // Lives in an application-specific directory, not a dotfile in $HOME
    assert!(path.ends_with("spoplcli/.env"));
}

#[tokio::test]
async fn test_store_credentials_writes_all_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spoplcli/.env");

    config::store_credentials(
        &path,
        "client-id",
        "client-secret",
        "http://localhost:8080/callback",
    )
    .await
    .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();

    // One line per credential
    assert!(content.contains("SPOTIFY_API_AUTH_CLIENT_ID=client-id\n"));
    assert!(content.contains("SPOTIFY_API_AUTH_CLIENT_SECRET=client-secret\n"));
    assert!(content.contains("SPOTIFY_API_REDIRECT_URI=http://localhost:8080/callback\n"));
}

#[tokio::test]
async fn test_append_refresh_token_keeps_credentials() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");

    config::store_credentials(
        &path,
        "client-id",
        "client-secret",
        "http://localhost:8080/callback",
    )
    .await
    .unwrap();
    config::append_refresh_token(&path, "first-token")
        .await
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();

    // Credentials survive the append, the token lands at the end
    assert!(content.contains("SPOTIFY_API_AUTH_CLIENT_ID=client-id"));
    assert!(content.contains("SPOTIFY_API_AUTH_CLIENT_SECRET=client-secret"));
    assert!(content.ends_with("SPOTIFY_API_REFRESH_TOKEN=first-token\n"));
}

#[tokio::test]
async fn test_append_refresh_token_replaces_previous_token() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");

    config::append_refresh_token(&path, "first-token")
        .await
        .unwrap();
    config::append_refresh_token(&path, "second-token")
        .await
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();

    // Exactly one token line remains, carrying the newest value
    let token_lines: Vec<&str> = content
        .lines()
        .filter(|line| line.starts_with("SPOTIFY_API_REFRESH_TOKEN="))
        .collect();
    assert_eq!(token_lines, vec!["SPOTIFY_API_REFRESH_TOKEN=second-token"]);
}

#[tokio::test]
async fn test_append_refresh_token_without_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");

    config::append_refresh_token(&path, "first-token")
        .await
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "SPOTIFY_API_REFRESH_TOKEN=first-token\n");
}
