//! Spotify Genre Playlist CLI Library
//!
//! This library provides functionality for building genre playlists from a
//! user's saved tracks on Spotify. It includes modules for API communication,
//! CLI operations, configuration management, and various utilities for
//! aggregating tracks, artists, and genres.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - High-level token and library management
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spoplcli::{config, cli};
//!
//! #[tokio::main]
//! async fn main() {
//!     if let Err(e) = config::load_env().await {
//!         eprintln!("Configuration error: {}", e);
//!     }
//!     // Dispatch to a CLI command...
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias used for fallible plumbing throughout the crate.
///
/// The boxed error keeps `Send + Sync` bounds so values cross `.await`
/// points freely.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line with a blue bullet.
///
/// Takes the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Found {} genres", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line with a red marker and exits the process with
/// status 1.
///
/// Reserved for unrecoverable situations; nothing after the invocation
/// runs, which also lets it stand in for a value in match arms.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // not reached
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line with a yellow marker. Execution continues.
///
/// # Example
///
/// ```
/// warning!("No tracks matched the chosen genre");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
