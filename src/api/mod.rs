//! # API Module
//!
//! This module provides the HTTP endpoints served by the local landing
//! server during the OAuth authorization flow.
//!
//! ## Overview
//!
//! The authorization flow opens Spotify's consent page in the browser.
//! After the user grants access, Spotify redirects to the local callback
//! with the authorization code in the query string. The callback endpoint
//! renders that code on a small landing page so the user can paste it back
//! into the terminal prompt, where the actual token exchange happens.
//!
//! ## Endpoints
//!
//! ### Authorization
//!
//! - [`callback`] - Handles the OAuth redirect from Spotify's authorization
//!   server. Validates the returned `state` against the value generated at
//!   the start of the flow and displays the authorization code.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information, handy
//!   for checking that the landing server actually came up.
//!
//! ## Architecture
//!
//! Built on the [Axum](https://docs.rs/axum) web framework. Each endpoint
//! is an async function wired into the router in [`crate::server`]. The
//! expected `state` value travels into the callback handler via an
//! [`axum::Extension`] layer.
//!
//! ## Security Considerations
//!
//! - The callback rejects redirects whose `state` does not match the one
//!   generated for the current flow
//! - The authorization code is only ever rendered locally; the token
//!   exchange itself happens in the terminal flow, not in the handler

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
