//! Build script for the Spotify Genre Playlist CLI.
//!
//! Copies the configuration template shipped with the crate into the user's
//! local data directory so that a freshly installed binary finds an example
//! file next to where it keeps its real credentials.
//!
//! # File Operations
//!
//! ## Source Location
//! The script looks for `.env.example` in the crate root directory (where
//! Cargo.toml resides).
//!
//! ## Destination Location
//! The template is copied to the platform-specific local data directory:
//! - Linux: `~/.local/share/spoplcli/.env.example`
//! - macOS: `~/Library/Application Support/spoplcli/.env.example`
//! - Windows: `%LOCALAPPDATA%/spoplcli/.env.example`
//!
//! # Error Handling Strategy
//!
//! A missing template only produces a `cargo:warning`; directory creation and
//! copy failures abort the build because they point at a broken environment.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the local data directory.
///
/// Registers the template with cargo's rebuild tracking so edits to it
/// trigger a fresh copy on the next build.
///
/// # Returns
///
/// - `Ok(())` - All operations completed successfully
/// - `Err(Box<dyn std::error::Error>)` - Critical failure occurred
///
/// # Environment Variables Used
///
/// - `CARGO_MANIFEST_DIR` - Path to the crate root directory (provided by cargo)
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spoplcli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
