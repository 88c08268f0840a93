use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    errors::MovieDbError,
    types::{MovieList, PageEnvelope},
};

/// Category of a cached page. Each category owns exactly one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKind {
    PopularPeople,
    PopularMovies,
    NowPlayingMovies,
}

impl CacheKind {
    fn relative_path(&self) -> &'static str {
        match self {
            CacheKind::PopularPeople => "persons/popular-persons.json",
            CacheKind::PopularMovies => "movies/popular-movies.json",
            CacheKind::NowPlayingMovies => "movies/now-playing-movies.json",
        }
    }
}

impl From<MovieList> for CacheKind {
    fn from(list: MovieList) -> Self {
        match list {
            MovieList::Popular => CacheKind::PopularMovies,
            MovieList::NowPlaying => CacheKind::NowPlayingMovies,
        }
    }
}

/// Stores the last saved page of each [`CacheKind`] as a JSON file.
///
/// A save overwrites the previous page of the same category; there is no
/// multi-page retention, no write-then-rename and no locking between
/// concurrent invocations.
pub struct PageCacheManager {
    root: PathBuf,
}

impl PageCacheManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, kind: CacheKind) -> PathBuf {
        self.root.join(kind.relative_path())
    }

    /// Writes `payload` to the category file, replacing any previous content.
    ///
    /// Returns the path written to.
    pub async fn persist<T: Serialize>(
        &self,
        kind: CacheKind,
        payload: &T,
    ) -> Result<PathBuf, MovieDbError> {
        let path = self.path(kind);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(payload)?;
        async_fs::write(&path, json).await?;
        Ok(path)
    }

    /// Loads the cached page of `kind`, provided it is page `page`.
    ///
    /// # Errors
    ///
    /// - [`MovieDbError::CacheMissing`] if nothing was saved for `kind`
    /// - [`MovieDbError::PageMismatch`] if a different page is cached
    /// - [`MovieDbError::Io`] / [`MovieDbError::Parse`] on unreadable content
    pub async fn load<T: DeserializeOwned>(
        &self,
        kind: CacheKind,
        page: u32,
    ) -> Result<PageEnvelope<T>, MovieDbError> {
        let path = self.path(kind);
        if !exists(&path).await {
            return Err(MovieDbError::CacheMissing { path });
        }

        let content = async_fs::read_to_string(&path).await?;
        let envelope: PageEnvelope<T> = serde_json::from_str(&content)?;

        if envelope.page != page {
            return Err(MovieDbError::PageMismatch {
                requested: page,
                cached: envelope.page,
            });
        }

        Ok(envelope)
    }
}

async fn exists(path: &Path) -> bool {
    async_fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}
