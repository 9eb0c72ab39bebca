use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::application::PaginationParams;

/// Sort key for movie listings.
///
/// Every key is combined with (created_at desc, id asc) tie-breaks at query
/// time so page windows are stable between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    ReviewsDesc,
    RatingDesc,
    ReleaseDesc,
    ReleaseAsc,
    #[default]
    UploadedDesc,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::ReviewsDesc => write!(f, "reviews_desc"),
            SortKey::RatingDesc => write!(f, "rating_desc"),
            SortKey::ReleaseDesc => write!(f, "release_desc"),
            SortKey::ReleaseAsc => write!(f, "release_asc"),
            SortKey::UploadedDesc => write!(f, "uploaded_desc"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reviews_desc" => Ok(SortKey::ReviewsDesc),
            "rating_desc" => Ok(SortKey::RatingDesc),
            "release_desc" => Ok(SortKey::ReleaseDesc),
            "release_asc" => Ok(SortKey::ReleaseAsc),
            "uploaded_desc" => Ok(SortKey::UploadedDesc),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

/// Restrict a listing to movies the requesting user has (or has not)
/// reviewed. Has no effect without a requesting user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewScope {
    #[default]
    All,
    Mine,
    NotMine,
}

impl std::fmt::Display for ReviewScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewScope::All => write!(f, "all"),
            ReviewScope::Mine => write!(f, "mine"),
            ReviewScope::NotMine => write!(f, "not_mine"),
        }
    }
}

impl std::str::FromStr for ReviewScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ReviewScope::All),
            "mine" => Ok(ReviewScope::Mine),
            "not_mine" => Ok(ReviewScope::NotMine),
            _ => Err(format!("Invalid review scope: {}", s)),
        }
    }
}

/// Fully validated listing request, consumed by the query engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListFilter {
    /// Case-insensitive substring matched against title or synopsis.
    pub query: Option<String>,
    /// Keep movies whose average rating is at least this many stars.
    pub min_stars: Option<i32>,
    pub review_scope: ReviewScope,
    pub sort: SortKey,
    pub pagination: PaginationParams,
    pub requesting_user_id: Option<Uuid>,
}

impl Default for MovieListFilter {
    fn default() -> Self {
        Self {
            query: None,
            min_stars: None,
            review_scope: ReviewScope::All,
            sort: SortKey::UploadedDesc,
            pagination: PaginationParams::default(),
            requesting_user_id: None,
        }
    }
}

impl MovieListFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn with_min_stars(mut self, min_stars: i32) -> Self {
        self.min_stars = Some(min_stars);
        self
    }

    pub fn with_scope(mut self, scope: ReviewScope, requesting_user_id: Uuid) -> Self {
        self.review_scope = scope;
        self.requesting_user_id = Some(requesting_user_id);
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.pagination = PaginationParams::new(page, page_size);
        self
    }
}
