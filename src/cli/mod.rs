//! # CLI Module
//!
//! Command implementations for moviedbcli. Each command is a short, linear
//! sequence: start a spinner, fetch from the API or read the local cache,
//! resolve the spinner, then print or save.
//!
//! ## Commands
//!
//! - [`list_people`] - Popular people, from the API or the local cache
//! - [`fetch_person`] - A single person by id
//! - [`list_movies`] - Popular or now-playing movies, from the API or the cache
//! - [`fetch_movie`] - A single movie by id, or its reviews
//!
//! ## Network vs. local source
//!
//! The list commands share one decision tree over `--save` and `--local`:
//!
//! | `--local` | `--save` | Behavior |
//! |---|---|---|
//! | no | no | fetch page, print it |
//! | no | yes | fetch page, write it to the cache |
//! | yes | no | read page from the cache, print it |
//! | yes | yes | fetch page, write it to the cache, then read it back and print it |
//!
//! The read-back in the last row only happens once the save has completed; a
//! failed fetch or save ends the command. Saving stores the body as received,
//! without parsing its entries.
//!
//! ## Error reporting
//!
//! Every command returns `Result<(), MovieDbError>`. Failures have already been
//! shown on the spinner when they reach the caller, so `main` only has to
//! choose the exit status.

mod movies;
mod people;

use std::{fmt::Display, path::PathBuf};

use crate::{
    config::Config, errors::MovieDbError, management::PageCacheManager, progress::Spinner,
    tmdb::ApiClient, types::PageEnvelope,
};

pub use movies::fetch_movie;
pub use movies::list_movies;
pub use people::fetch_person;
pub use people::list_people;

/// Collaborators shared by all commands of one invocation.
pub struct Context {
    pub client: ApiClient,
    pub cache: PageCacheManager,
}

impl Context {
    pub fn new(config: &Config) -> Self {
        Self {
            client: ApiClient::new(config),
            cache: PageCacheManager::new(config.cache_dir.clone()),
        }
    }
}

/// Outcome of fetching a list page: written to the cache untouched, or
/// parsed for display.
enum Fetched<T> {
    Saved(PathBuf),
    Loaded(PageEnvelope<T>),
}

/// Resolves `spinner` from `result`: succeeded with `message` on `Ok`, failed
/// with the error text on `Err`. The result is passed through unchanged.
fn finish<T>(
    spinner: Spinner,
    result: Result<T, MovieDbError>,
    message: impl Display,
) -> Result<T, MovieDbError> {
    match result {
        Ok(value) => {
            spinner.succeed(message);
            Ok(value)
        }
        Err(e) => {
            spinner.fail(&e);
            Err(e)
        }
    }
}
