use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, types::PendingAuth, warning};

pub async fn start_landing_server(state: Arc<PendingAuth>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => {
            warning!("Failed to parse server address: {}", e);
            return;
        }
    };

    // best effort: the code can also be copied from the address bar
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            warning!("Failed to start the landing page server on {}: {}", addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        warning!("Landing page server stopped: {}", e);
    }
}
