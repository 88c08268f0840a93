use serde_json::Value;

use crate::{
    errors::MovieDbError,
    tmdb::{client::ApiClient, request::ApiRequest},
    types::PersonDetails,
};

/// Fetches one page of popular people as received.
///
/// The page is left untyped so it can be saved without any checks on its
/// entries; use [`crate::types::PageEnvelope::from_value`] to display it.
pub async fn popular(client: &ApiClient, page: u32) -> Result<Value, MovieDbError> {
    client.get_json(&ApiRequest::popular_people(page)).await
}

pub async fn by_id(client: &ApiClient, id: u64) -> Result<PersonDetails, MovieDbError> {
    let raw = client.get_json(&ApiRequest::person(id)).await?;
    Ok(serde_json::from_value(raw)?)
}
