//! Movie catalog records as returned by the backend API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ReelError, Result};

/// Default image CDN root for poster and profile paths.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Default poster rendition.
pub const DEFAULT_POSTER_SIZE: &str = "w500";

const MIN_USERNAME_LEN: usize = 3;

/// Anything with a display title that search can match against.
pub trait Titled {
    fn title(&self) -> &str;
}

/// Records addressable by a numeric backend id.
pub trait Identified {
    fn id(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub release_year: Option<i32>,
    #[serde(alias = "posterPath")]
    pub poster_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    /// Absent on the profile endpoint, where every comment is the owner's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub content: String,
    #[serde(alias = "createdAt")]
    pub timestamp: DateTime<Utc>,
    pub movie_title: String,
    pub movie_id: i64,
}

/// Profile payload: the source of the favorites and comments lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub total_favorites: u32,
    #[serde(default)]
    pub total_comments: u32,
    #[serde(default)]
    pub favorite_movies: Vec<MovieSummary>,
    #[serde(default, alias = "Comments")]
    pub recent_comments: Vec<Comment>,
}

impl UserProfile {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| ReelError::json("user profile", e))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReelError::json("user profile", e))
    }
}

impl Titled for MovieSummary {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Titled for Comment {
    fn title(&self) -> &str {
        &self.movie_title
    }
}

impl Identified for MovieSummary {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Comment {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Resolve a catalog image path against the CDN.
///
/// Absolute URLs pass through untouched; blank paths resolve to `None` so
/// callers can fall back to a placeholder.
pub fn poster_url(path: Option<&str>, base_url: &str, size: &str) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Some(format!("{base}/{size}/{path}"))
}

/// Local username check run before asking the backend to rename.
pub fn validate_username(candidate: &str) -> Result<&str> {
    let trimmed = candidate.trim();
    if trimmed.chars().count() < MIN_USERNAME_LEN {
        return Err(ReelError::invalid_username(format!(
            "must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    Ok(trimmed)
}
