//! Error type shared by the network and local cache paths.
//!
//! Every command returns `Result<_, MovieDbError>` so the dispatcher can report
//! failures the same way regardless of where the data came from.

use std::{fmt, io, path::PathBuf};

use reqwest::StatusCode;

#[derive(Debug)]
pub enum MovieDbError {
    /// Connection, DNS or TLS failure before a response was received.
    Transport(reqwest::Error),
    /// The API answered with a non-success status.
    Api { status: StatusCode, message: String },
    /// A body that is not JSON or does not have the expected shape.
    Parse(serde_json::Error),
    /// Reading or writing a cache file failed.
    Io(io::Error),
    /// No cache file exists for the requested category.
    CacheMissing { path: PathBuf },
    /// The cache file holds a different page than the one requested.
    PageMismatch { requested: u32, cached: u32 },
}

impl fmt::Display for MovieDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieDbError::Transport(e) => write!(f, "Request failed: {}", e),
            MovieDbError::Api { status, message } => {
                write!(f, "API responded with {}: {}", status, message)
            }
            MovieDbError::Parse(e) => write!(f, "Unexpected response format: {}", e),
            MovieDbError::Io(e) => write!(f, "Cache file error: {}", e),
            MovieDbError::CacheMissing { path } => {
                write!(f, "File doesn't exist: {}", path.display())
            }
            MovieDbError::PageMismatch { requested, cached } => write!(
                f,
                "The page you want to load ({}) doesn't exist - Existing Page: {}",
                requested, cached
            ),
        }
    }
}

impl std::error::Error for MovieDbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MovieDbError::Transport(e) => Some(e),
            MovieDbError::Parse(e) => Some(e),
            MovieDbError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MovieDbError {
    fn from(err: reqwest::Error) -> Self {
        MovieDbError::Transport(err)
    }
}

impl From<serde_json::Error> for MovieDbError {
    fn from(err: serde_json::Error) -> Self {
        MovieDbError::Parse(err)
    }
}

impl From<io::Error> for MovieDbError {
    fn from(err: io::Error) -> Self {
        MovieDbError::Io(err)
    }
}
