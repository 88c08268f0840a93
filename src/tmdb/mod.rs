//! # TMDB Integration Module
//!
//! HTTP access to The Movie Database v3 API. Every function performs a single
//! GET request, buffers the whole body and converts it into the typed payloads
//! from [`crate::types`].
//!
//! ## Layout
//!
//! ```text
//! CLI Layer
//!     ↓
//! people / movies   (typed wrappers per endpoint)
//!     ↓
//! client            (one GET, status and JSON handling)
//!     ↓
//! request           (path + query descriptor)
//! ```
//!
//! ## Endpoints
//!
//! - `GET /3/person/popular?page=N` - [`people::popular`]
//! - `GET /3/person/{id}` - [`people::by_id`]
//! - `GET /3/movie/popular?page=N` - [`movies::list`]
//! - `GET /3/movie/now_playing?page=N` - [`movies::list`]
//! - `GET /3/movie/{id}` - [`movies::by_id`]
//! - `GET /3/movie/{id}/reviews` - [`movies::reviews`]
//!
//! All requests carry the configured `api_key` query parameter. Failures are
//! reported as [`crate::errors::MovieDbError`]; nothing is retried.

pub mod client;
pub mod movies;
pub mod people;
pub mod request;

pub use client::ApiClient;
pub use request::ApiRequest;
