use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for creating a movie. The creator comes from the authenticated
/// request context, not from the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub release_date: NaiveDate,
    pub synopsis: String,
    pub trailer_url: Option<String>,
    pub poster_media_id: Option<Uuid>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub synopsis: Option<String>,
    pub trailer_url: Option<String>,
    pub poster_media_id: Option<Uuid>,
}
