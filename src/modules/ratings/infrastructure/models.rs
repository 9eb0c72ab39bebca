use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::ratings::domain::entities::Rating;
use crate::schema::ratings;

#[derive(Queryable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct RatingModel {
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub value: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct NewRating {
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub value: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RatingModel> for Rating {
    fn from(model: RatingModel) -> Self {
        Rating {
            movie_id: model.movie_id,
            user_id: model.user_id,
            value: model.value,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
