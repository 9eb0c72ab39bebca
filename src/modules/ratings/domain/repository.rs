use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::ratings::domain::entities::Rating;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Upsert the (movie, user) rating and rewrite the movie's average from
    /// the post-write rating set, all inside one transaction. Returns the
    /// newly written average.
    ///
    /// Fails with NotFound when the movie does not exist.
    async fn upsert_and_refresh_average(
        &self,
        movie_id: &Uuid,
        user_id: &Uuid,
        value: i32,
    ) -> AppResult<f32>;

    /// Pure read; None when the user has not rated this movie.
    async fn find(&self, movie_id: &Uuid, user_id: &Uuid) -> AppResult<Option<Rating>>;
}
