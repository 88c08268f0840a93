use serde::{Deserialize, Deserializer, Serialize, de, de::DeserializeOwned};
use serde_json::Value;
use tabled::Tabled;

/// Paginated response wrapper used by every TMDB list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    #[serde(deserialize_with = "page_number")]
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}

impl<T: DeserializeOwned> PageEnvelope<T> {
    /// Converts an already fetched page into typed entries for display.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Accepts the page as a JSON number, a whole float such as `2.0`, or a
/// numeric string.
fn page_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPage {
        Number(u64),
        Float(f64),
        Text(String),
    }

    match RawPage::deserialize(deserializer)? {
        RawPage::Number(n) => u32::try_from(n).map_err(de::Error::custom),
        RawPage::Float(f) if f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&f) => {
            Ok(f as u32)
        }
        RawPage::Float(f) => Err(de::Error::custom(format!("invalid page number {}", f))),
        RawPage::Text(s) => s.trim().parse::<u32>().map_err(de::Error::custom),
    }
}

/// Reads `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,
    #[serde(default)]
    pub known_for_department: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDetails {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,
    #[serde(default)]
    pub biography: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
    #[serde(default)]
    pub overview: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Reviews response; the `id` is the movie the reviews belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewPage {
    pub id: u64,
    #[serde(flatten)]
    pub reviews: PageEnvelope<Review>,
}

/// Which movie listing a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieList {
    Popular,
    NowPlaying,
}

impl MovieList {
    /// Resolves the CLI selector flags. Now-playing wins when set; otherwise
    /// the popular listing is used, whether or not `--popular` was given.
    pub fn from_flags(_popular: bool, now_playing: bool) -> Self {
        if now_playing {
            MovieList::NowPlaying
        } else {
            MovieList::Popular
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MovieList::Popular => "Popular movies",
            MovieList::NowPlaying => "Now playing movies",
        }
    }
}

#[derive(Tabled)]
pub struct PersonTableRow {
    pub id: u64,
    pub name: String,
    pub department: String,
    pub popularity: String,
}

#[derive(Tabled)]
pub struct MovieTableRow {
    pub id: u64,
    pub title: String,
    pub released: String,
    pub rating: String,
}
