use serde_json::Value;

use crate::{
    errors::MovieDbError,
    tmdb::{client::ApiClient, request::ApiRequest},
    types::{MovieDetails, MovieList, ReviewPage},
};

/// Fetches one page of the popular or now-playing listing as received.
///
/// The page is left untyped so it can be saved without any checks on its
/// entries; use [`crate::types::PageEnvelope::from_value`] to display it.
pub async fn list(client: &ApiClient, kind: MovieList, page: u32) -> Result<Value, MovieDbError> {
    let request = match kind {
        MovieList::Popular => ApiRequest::popular_movies(page),
        MovieList::NowPlaying => ApiRequest::now_playing_movies(page),
    };

    client.get_json(&request).await
}

pub async fn by_id(client: &ApiClient, id: u64) -> Result<MovieDetails, MovieDbError> {
    let raw = client.get_json(&ApiRequest::movie(id)).await?;
    Ok(serde_json::from_value(raw)?)
}

pub async fn reviews(client: &ApiClient, id: u64) -> Result<ReviewPage, MovieDbError> {
    let raw = client.get_json(&ApiRequest::movie_reviews(id)).await?;
    Ok(serde_json::from_value(raw)?)
}
