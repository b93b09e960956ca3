use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query};
use spoplcli::{api, types::PendingAuth};

// Helper function to build the shared state the server hands to the handler
fn pending(state: &str) -> Extension<Arc<PendingAuth>> {
    Extension(Arc::new(PendingAuth {
        state: state.to_string(),
    }))
}

// Helper function to build the callback query parameters
fn params(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn test_callback_renders_code() {
    let page = api::callback(params(&[("code", "AQAbc123"), ("state", "s1")]), pending("s1")).await;

    assert!(page.0.contains("AQAbc123"));
    assert!(page.0.contains("paste it into the terminal"));
}

#[tokio::test]
async fn test_callback_escapes_markup_in_code() {
    let page = api::callback(
        params(&[("code", "<script>alert('x')</script>"), ("state", "s1")]),
        pending("s1"),
    )
    .await;

    // Markup from the query string renders as text
    assert!(!page.0.contains("<script>"));
    assert!(page.0.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_callback_rejects_state_mismatch() {
    let page = api::callback(
        params(&[("code", "AQAbc123"), ("state", "forged")]),
        pending("s1"),
    )
    .await;

    // The code is never rendered for an unknown state
    assert!(!page.0.contains("AQAbc123"));
    assert!(page.0.contains("State mismatch"));
}

#[tokio::test]
async fn test_callback_reports_denied_authorization() {
    let page = api::callback(
        params(&[("error", "access_denied"), ("state", "s1")]),
        pending("s1"),
    )
    .await;

    assert!(page.0.contains("denied"));
}

#[tokio::test]
async fn test_callback_requires_code() {
    let page = api::callback(params(&[("state", "s1")]), pending("s1")).await;

    assert!(page.0.contains("Missing authorization code"));
}
