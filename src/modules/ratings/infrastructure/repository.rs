/// Diesel-based implementation of RatingRepository
///
/// The upsert and the average refresh run inside one transaction with the
/// movie row locked (SELECT ... FOR UPDATE), so concurrent raters of the
/// same movie serialize and the stored average always matches the full
/// rating set. Raters of different movies do not contend.
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::ratings::domain::entities::{average_value, Rating};
use crate::modules::ratings::domain::repository::RatingRepository;
use crate::modules::ratings::infrastructure::models::{NewRating, RatingModel};
use crate::schema::{movies, ratings};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct RatingRepositoryImpl {
    db: Arc<Database>,
}

impl RatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn upsert_and_refresh_average(
        &self,
        movie_id: &Uuid,
        user_id: &Uuid,
        value: i32,
    ) -> AppResult<f32> {
        let db = Arc::clone(&self.db);
        let movie_id = *movie_id;
        let user_id = *user_id;

        task::spawn_blocking(move || -> AppResult<f32> {
            let mut conn = db.get_connection()?;

            conn.transaction::<f32, AppError, _>(|conn| {
                // Lock the movie row first; all aggregate writers take this
                // lock, which serializes them per movie.
                let locked: Option<Uuid> = movies::table
                    .filter(movies::id.eq(movie_id))
                    .select(movies::id)
                    .for_update()
                    .first::<Uuid>(conn)
                    .optional()?;
                if locked.is_none() {
                    return Err(AppError::NotFound(format!(
                        "Movie with ID {} not found",
                        movie_id
                    )));
                }

                let now = Utc::now();
                let new_rating = NewRating {
                    movie_id,
                    user_id,
                    value,
                    created_at: now,
                    updated_at: now,
                };

                diesel::insert_into(ratings::table)
                    .values(&new_rating)
                    .on_conflict((ratings::movie_id, ratings::user_id))
                    .do_update()
                    .set((ratings::value.eq(value), ratings::updated_at.eq(now)))
                    .execute(conn)?;

                // Recompute from the post-write state.
                let values: Vec<i32> = ratings::table
                    .filter(ratings::movie_id.eq(movie_id))
                    .select(ratings::value)
                    .load::<i32>(conn)?;
                let average = average_value(&values);

                diesel::update(movies::table.filter(movies::id.eq(movie_id)))
                    .set(movies::average_rating.eq(average))
                    .execute(conn)?;

                Ok(average)
            })
        })
        .await?
    }

    async fn find(&self, movie_id: &Uuid, user_id: &Uuid) -> AppResult<Option<Rating>> {
        let db = Arc::clone(&self.db);
        let movie_id = *movie_id;
        let user_id = *user_id;

        let model = task::spawn_blocking(move || -> AppResult<Option<RatingModel>> {
            let mut conn = db.get_connection()?;
            let m = ratings::table
                .filter(ratings::movie_id.eq(movie_id))
                .filter(ratings::user_id.eq(user_id))
                .first::<RatingModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Rating::from))
    }
}
