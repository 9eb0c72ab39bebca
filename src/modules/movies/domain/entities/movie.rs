use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A movie in the catalog.
///
/// `average_rating`, `review_count` and `rank` are denormalized aggregates.
/// They are maintained transactionally by the ratings/reviews contexts and
/// the ranking batch; nothing else writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub release_date: NaiveDate,
    pub synopsis: String,
    pub trailer_url: Option<String>,
    pub poster_media_id: Option<Uuid>,
    pub created_by: Uuid,
    pub average_rating: f32,
    pub review_count: i32,
    /// 1-based dense rank; 0 until the first ranking batch has run.
    pub rank: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Create a new movie with zeroed aggregates.
    pub fn new(
        title: String,
        release_date: NaiveDate,
        synopsis: String,
        trailer_url: Option<String>,
        poster_media_id: Option<Uuid>,
        created_by: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            release_date,
            synopsis,
            trailer_url,
            poster_media_id,
            created_by,
            average_rating: 0.0,
            review_count: 0,
            rank: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_created_by(&self, user_id: &Uuid) -> bool {
        self.created_by == *user_id
    }

    pub fn is_ranked(&self) -> bool {
        self.rank > 0
    }
}
