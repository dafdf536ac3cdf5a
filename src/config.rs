//! Configuration management for cocktailcli.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a sensible default, so the tool
//! works out of the box against the public API.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

use crate::utils;

pub const DEFAULT_API_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
pub const DEFAULT_LETTER: char = 'a';
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_SEARCH_ENGINE_URL: &str = "https://www.google.com/search";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `cocktailcli/.env` inside the platform-specific local data directory:
/// - Linux: `~/.local/share/cocktailcli/.env`
/// - macOS: `~/Library/Application Support/cocktailcli/.env`
/// - Windows: `%LOCALAPPDATA%/cocktailcli/.env`
///
/// A missing `.env` file is fine; the defaults below apply.
///
/// # Returns
///
/// Returns `Ok(())` when the file was loaded or does not exist.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use cocktailcli::{config, warning};
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         warning!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("cocktailcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Returns the base URL of the recipe API.
///
/// Reads `COCKTAIL_API_URL`, which points the client at TheCocktailDB or at a
/// compatible mirror. The endpoint file names (`search.php`, `lookup.php`)
/// are appended by the client.
///
/// # Returns
///
/// The configured URL, or [`DEFAULT_API_URL`] when unset.
///
/// # Example
///
/// ```
/// let url = cocktail_api_url(); // e.g., "https://www.thecocktaildb.com/api/json/v1/1"
/// ```
pub fn cocktail_api_url() -> String {
    env::var("COCKTAIL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the letter used for the default listing on page load.
///
/// Reads `COCKTAIL_DEFAULT_LETTER` and lowercases it.
///
/// # Returns
///
/// The configured letter, or [`DEFAULT_LETTER`] when unset or not exactly
/// one ASCII letter.
///
/// # Example
///
/// ```
/// let letter = default_letter(); // e.g., 'a'
/// ```
pub fn default_letter() -> char {
    env::var("COCKTAIL_DEFAULT_LETTER")
        .ok()
        .and_then(|v| utils::parse_letter(&v).ok())
        .unwrap_or(DEFAULT_LETTER)
}

/// Returns the address the local web front end binds to.
///
/// Reads `SERVER_ADDRESS`. The value is parsed as a socket address when the
/// server starts.
///
/// # Returns
///
/// The configured address, or [`DEFAULT_SERVER_ADDRESS`] when unset.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the web search engine used by the external search shortcut.
///
/// Reads `SEARCH_ENGINE_URL`. The encoded query is appended as `?q=<query>`.
///
/// # Returns
///
/// The configured URL, or [`DEFAULT_SEARCH_ENGINE_URL`] when unset.
///
/// # Example
///
/// ```
/// let engine = search_engine_url(); // e.g., "https://www.google.com/search"
/// ```
pub fn search_engine_url() -> String {
    env::var("SEARCH_ENGINE_URL").unwrap_or_else(|_| DEFAULT_SEARCH_ENGINE_URL.to_string())
}
