//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! genre playlist pipeline. It implements authentication, saved-track and
//! artist retrieval, and playlist management, and serves as the primary
//! integration layer between the CLI and Spotify's services. All HTTP
//! communication, authentication flows, and error handling live here.
//!
//! ## Overview
//!
//! The Spotify module implements an SDK-like interface for the Web API
//! operations the application needs. It abstracts away the mechanics of
//! HTTP requests and OAuth grants, providing a clean Rust interface for the
//! higher-level management and CLI layers.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 authorization code)
//!     ├── Saved Tracks (Library pagination)
//!     ├── Artist Operations (Batch genre lookup)
//!     ├── User Profile (Current user)
//!     └── Playlist Operations (Create, Add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization code flow:
//! - **Authorization URL**: Builds the consent URL with scope and state
//! - **Code Exchange**: Trades the pasted authorization code for tokens
//! - **Token Refresh**: Obtains fresh access tokens from the stored
//!   refresh token on subsequent runs
//!
//! ### Saved Tracks Module
//!
//! [`tracks`] - Handles the user's library:
//! - **Page Retrieval**: Fetches fixed-size pages of saved tracks
//! - **Track Counting**: Efficient total count queries without full data
//!   transfer
//!
//! ### Artist Module
//!
//! [`artists`] - Resolves artist metadata:
//! - **Batch Lookup**: Fetches up to 50 full artist records per request,
//!   including the genre lists the pipeline is after
//!
//! ### User Module
//!
//! [`user`] - Current-user profile lookup, needed for playlist creation.
//!
//! ### Playlist Module
//!
//! [`playlist`] - Playlist creation and modification:
//! - **Playlist Creation**: Creates playlists with name, description, and
//!   visibility flags
//! - **Track Management**: Adds tracks in batches of 50 URIs with a fixed
//!   pause before each request; a failed batch stops the loop and leaves
//!   earlier batches in place
//!
//! ## Authentication Strategy
//!
//! The module implements the standard OAuth 2.0 authorization code grant
//! with a client secret:
//!
//! 1. **Authorization Request**: Directs the user to Spotify's consent page
//! 2. **Landing Page**: A local server renders the authorization code after
//!    the redirect
//! 3. **Code Exchange**: Exchanges the pasted code for access and refresh
//!    tokens using HTTP basic authentication
//! 4. **Refresh**: Later runs exchange the stored refresh token directly
//!
//! ## Error Handling
//!
//! Requests are single-shot: there is no retry or backoff machinery. Plain
//! API calls surface failures as `reqwest::Error` via `error_for_status`;
//! token exchanges return `String` errors that include the HTTP status and
//! response body so the CLI can print what the accounts service said.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Token exchange and refresh operations
//! - `GET /me` - Current user profile
//! - `GET /me/tracks` - Saved tracks with offset pagination
//! - `GET /artists` - Batch artist lookup
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//!
//! ## Configuration Integration
//!
//! All base URLs, credentials, scope, and the redirect URI come from the
//! [`crate::config`] accessors, so tests can point the module at a local
//! mock server through the environment.

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod tracks;
pub mod user;
