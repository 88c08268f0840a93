//! Configuration management for the movie database client.
//!
//! Configuration is read once at startup into a [`Config`] value which is then
//! threaded into the API client and the cache manager. Values come from:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

/// Default upstream base URL. Request paths already carry the `/3` API version.
pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org";

const APP_DIR: &str = "moviedbcli";

/// Runtime configuration for a single CLI invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB v3 API key; requests are sent without it when unset.
    pub api_key: Option<String>,
    /// Scheme, host and optional port of the upstream API.
    pub api_url: String,
    /// Root directory holding the cache files.
    pub cache_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Reads `MOVIEDB_API_KEY` (falling back to `API_KEY`), `MOVIEDB_API_URL`
    /// and `MOVIEDB_CACHE_DIR`. Empty values count as unset.
    pub fn from_env() -> Self {
        let api_key = non_empty_var("MOVIEDB_API_KEY").or_else(|| non_empty_var("API_KEY"));
        let api_url = non_empty_var("MOVIEDB_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let cache_dir = non_empty_var("MOVIEDB_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_cache_dir);

        Self {
            api_key,
            api_url,
            cache_dir,
        }
    }
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up at:
/// - Linux: `~/.local/share/moviedbcli/.env`
/// - macOS: `~/Library/Application Support/moviedbcli/.env`
/// - Windows: `%LOCALAPPDATA%/moviedbcli/.env`
///
/// The directory is created when missing and a missing file is not an error.
/// Variables already present in the process environment are not overridden.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the `.env`
/// file cannot be read or parsed.
pub async fn load_env() -> Result<(), String> {
    let path = app_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(())
}

fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

fn default_cache_dir() -> PathBuf {
    app_dir().join("cache")
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_dir_lives_under_app_dir() {
        let dir = default_cache_dir();
        assert!(dir.ends_with("moviedbcli/cache"));
    }

    #[test]
    fn missing_variable_is_none() {
        assert_eq!(non_empty_var("MOVIEDB_SURELY_NOT_SET_ANYWHERE"), None);
    }
}
