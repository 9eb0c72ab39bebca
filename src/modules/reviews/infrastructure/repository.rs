/// Diesel-based implementation of ReviewRepository
///
/// Review inserts/deletes and the movie's review_count move together in one
/// transaction, taking the same movie-row lock as the rating aggregator so
/// all aggregate writers for a movie serialize.
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::reviews::domain::entities::Review;
use crate::modules::reviews::domain::repository::ReviewRepository;
use crate::modules::reviews::infrastructure::models::{NewReview, ReviewModel};
use crate::schema::{movies, reviews};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct ReviewRepositoryImpl {
    db: Arc<Database>,
}

impl ReviewRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, review: &Review) -> AppResult<Review> {
        let db = Arc::clone(&self.db);
        let new_row = NewReview::from_entity(review);
        let movie_id = review.movie_id;

        let saved = task::spawn_blocking(move || -> AppResult<ReviewModel> {
            let mut conn = db.get_connection()?;

            conn.transaction::<ReviewModel, AppError, _>(|conn| {
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

                let saved = diesel::insert_into(reviews::table)
                    .values(&new_row)
                    .get_result::<ReviewModel>(conn)?;

                diesel::update(movies::table.filter(movies::id.eq(movie_id)))
                    .set(movies::review_count.eq(movies::review_count + 1))
                    .execute(conn)?;

                Ok(saved)
            })
        })
        .await??;

        Ok(saved.into())
    }

    async fn update_content(
        &self,
        review_id: &Uuid,
        user_id: &Uuid,
        content: &str,
    ) -> AppResult<Review> {
        let db = Arc::clone(&self.db);
        let review_id = *review_id;
        let user_id = *user_id;
        let content = content.to_string();

        let saved = task::spawn_blocking(move || -> AppResult<ReviewModel> {
            let mut conn = db.get_connection()?;
            diesel::update(
                reviews::table
                    .filter(reviews::id.eq(review_id))
                    .filter(reviews::user_id.eq(user_id)),
            )
            .set((
                reviews::content.eq(&content),
                reviews::updated_at.eq(Utc::now()),
            ))
            .get_result::<ReviewModel>(&mut conn)
            .optional()?
            .ok_or_else(|| AppError::NotFound(format!("Review with ID {} not found", review_id)))
        })
        .await??;

        Ok(saved.into())
    }

    async fn delete(&self, review_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let review_id = *review_id;
        let user_id = *user_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            conn.transaction::<(), AppError, _>(|conn| {
                // Ownership is part of the lookup; a review owned by someone
                // else surfaces as NotFound, same as a missing one.
                let target: Option<(Uuid, Uuid)> = reviews::table
                    .filter(reviews::id.eq(review_id))
                    .filter(reviews::user_id.eq(user_id))
                    .select((reviews::id, reviews::movie_id))
                    .first(conn)
                    .optional()?;
                let movie_id = match target {
                    Some((_, movie_id)) => movie_id,
                    None => {
                        return Err(AppError::NotFound(format!(
                            "Review with ID {} not found",
                            review_id
                        )))
                    }
                };

                // The review exists, so its movie does too (FK).
                movies::table
                    .filter(movies::id.eq(movie_id))
                    .select(movies::id)
                    .for_update()
                    .first::<Uuid>(conn)?;

                diesel::delete(reviews::table.filter(reviews::id.eq(review_id))).execute(conn)?;

                diesel::update(movies::table.filter(movies::id.eq(movie_id)))
                    .set(movies::review_count.eq(movies::review_count - 1))
                    .execute(conn)?;

                Ok(())
            })
        })
        .await?
    }

    async fn list_for_movie(
        &self,
        movie_id: &Uuid,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResult<Review>> {
        let db = Arc::clone(&self.db);
        let movie_id = *movie_id;
        let params = pagination.clone();
        let pagination = pagination.clone();

        let (models, total) = task::spawn_blocking(move || -> AppResult<(Vec<ReviewModel>, i64)> {
            let mut conn = db.get_connection()?;

            let total: i64 = reviews::table
                .filter(reviews::movie_id.eq(movie_id))
                .count()
                .get_result(&mut conn)?;

            let rows = reviews::table
                .filter(reviews::movie_id.eq(movie_id))
                .order((reviews::created_at.desc(), reviews::id.asc()))
                .offset(pagination.offset())
                .limit(pagination.limit())
                .load::<ReviewModel>(&mut conn)?;

            Ok((rows, total))
        })
        .await??;

        let items = models.into_iter().map(Review::from).collect();
        Ok(PaginatedResult::new(items, total as u64, &params))
    }
}
