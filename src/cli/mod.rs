//! # CLI Module
//!
//! This module provides the command-line interface layer for spoplcli, a
//! Spotify API client that builds genre playlists from a user's saved
//! tracks. It implements all user-facing CLI commands and coordinates
//! between the underlying API services, data management, and user
//! interaction components.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the
//! application's functionality. It provides commands for:
//!
//! - **Authentication Management**: OAuth 2.0 authorization code flow for
//!   Spotify API access, including the first-run credential setup
//! - **Playlist Creation**: The full pipeline from saved tracks to a genre
//!   playlist, interactively or flag-driven
//! - **Genre Queries**: Listing the genres present in the user's library
//! - **Information Queries**: Account and library status information
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the interactive authorization flow and stores the
//!   refresh token for subsequent runs
//!
//! ### Playlist Operations
//!
//! - [`create`] - Loads the library, resolves artist genres, filters by a
//!   chosen genre, and creates the playlist. Without a `--genre` flag the
//!   command loops interactively, prompting for genre and playlist options
//!   and offering to create another playlist afterwards
//!
//! ### Genre Operations
//!
//! - [`genres`] - Displays the resolved genre set as a table with artist
//!   counts and optional search filtering
//!
//! ### Information Commands
//!
//! - [`info`] - Shows the authenticated user's profile or the saved-track
//!   total
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Token/Library Aggregation)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each CLI command delegates to the management and API modules while
//! handling user interaction, progress feedback, and error presentation.
//!
//! ## Data Flow
//!
//! The create pipeline runs strictly top to bottom once per invocation:
//!
//! 1. **Token Bootstrap**: Refresh-token exchange, or the interactive
//!    authorization flow on the first run
//! 2. **Library Load**: Paginated saved-track fetch plus batched artist
//!    genre resolution
//! 3. **Merge**: Genre-annotated artists are joined back into the tracks
//! 4. **Filter and Sort**: Case-sensitive genre filter, newest first
//! 5. **Playlist Build**: Playlist creation and batched track addition
//!
//! ## Error Handling Philosophy
//!
//! - **Fatal Setup Errors**: Token and library failures terminate with a
//!   clear message and exit status 1
//! - **Batch Failures**: A failed track-addition batch stops the loop with
//!   a warning; earlier batches stay in the playlist
//! - **Helpful Messages**: Errors during token exchange include the HTTP
//!   response body so users can see what the accounts service said
//!
//! ## Progress and User Experience
//!
//! Long-running operations show spinners with live counts, and prompts use
//! the same question order and ENTER defaults throughout. All terminal
//! output goes through the crate's logging macros for consistent
//! formatting.
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::management`] - Token and library aggregation
//! - [`crate::types`] - Data structures and type definitions
//! - [`crate::utils`] - Pipeline helpers (dedup, merge, filter, sort)

mod auth;
mod create;
mod genres;
mod info;
pub mod prompt;

pub use auth::auth;
pub use create::create;
pub use genres::genres;
pub use info::info;
