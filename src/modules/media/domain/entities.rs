use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::media;

/// Full media row, payload included. Loaded only when a caller actually
/// wants the bytes.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = media)]
pub struct MediaObject {
    pub id: Uuid,
    pub content_type: String,
    pub size_bytes: i64,
    pub data: Vec<u8>,
    pub owner_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Metadata projection; what writes and listings return.
#[derive(Debug, Clone, Queryable, Serialize, Deserialize)]
pub struct MediaSummary {
    pub id: Uuid,
    pub content_type: String,
    pub size_bytes: i64,
    pub owner_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<MediaObject> for MediaSummary {
    fn from(object: MediaObject) -> Self {
        Self {
            id: object.id,
            content_type: object.content_type,
            size_bytes: object.size_bytes,
            owner_user_id: object.owner_user_id,
            created_at: object.created_at,
        }
    }
}

/// New media blob for insertion; `created_at` comes from the database
/// default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = media)]
pub struct NewMedia {
    pub id: Uuid,
    pub content_type: String,
    pub size_bytes: i64,
    pub data: Vec<u8>,
    pub owner_user_id: Option<Uuid>,
}

impl NewMedia {
    pub fn new(content_type: String, data: Vec<u8>, owner_user_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content_type,
            size_bytes: data.len() as i64,
            data,
            owner_user_id,
        }
    }
}
