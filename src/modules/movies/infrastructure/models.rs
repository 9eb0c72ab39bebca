use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::movies::domain::entities::Movie;
use crate::schema::movies;

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct MovieModel {
    pub id: Uuid,
    pub title: String,
    pub release_date: NaiveDate,
    pub synopsis: String,
    pub trailer_url: Option<String>,
    pub poster_media_id: Option<Uuid>,
    pub created_by: Uuid,
    pub average_rating: f32,
    pub review_count: i32,
    pub rank: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload (write)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovie {
    pub id: Uuid,
    pub title: String,
    pub release_date: NaiveDate,
    pub synopsis: String,
    pub trailer_url: Option<String>,
    pub poster_media_id: Option<Uuid>,
    pub created_by: Uuid,
    pub average_rating: f32,
    pub review_count: i32,
    pub rank: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update payload (write). Excludes `id`, `created_at`, `created_by` and the
/// derived aggregate columns, which belong to the ratings/reviews/ranking
/// contexts.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = movies, treat_none_as_null = true)]
pub struct MovieChangeset {
    pub title: String,
    pub release_date: NaiveDate,
    pub synopsis: String,
    pub trailer_url: Option<String>,
    pub poster_media_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Movie {
            id: model.id,
            title: model.title,
            release_date: model.release_date,
            synopsis: model.synopsis,
            trailer_url: model.trailer_url,
            poster_media_id: model.poster_media_id,
            created_by: model.created_by,
            average_rating: model.average_rating,
            review_count: model.review_count,
            rank: model.rank,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl NewMovie {
    pub fn from_entity(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            release_date: movie.release_date,
            synopsis: movie.synopsis.clone(),
            trailer_url: movie.trailer_url.clone(),
            poster_media_id: movie.poster_media_id,
            created_by: movie.created_by,
            average_rating: movie.average_rating,
            review_count: movie.review_count,
            rank: movie.rank,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

impl MovieChangeset {
    pub fn from_entity(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            release_date: movie.release_date,
            synopsis: movie.synopsis.clone(),
            trailer_url: movie.trailer_url.clone(),
            poster_media_id: movie.poster_media_id,
            updated_at: movie.updated_at,
        }
    }
}
