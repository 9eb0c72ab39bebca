use std::sync::Arc;
use uuid::Uuid;

use crate::log_info;
use crate::modules::ratings::domain::{entities::Rating, repository::RatingRepository};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

pub struct RatingService {
    rating_repo: Arc<dyn RatingRepository>,
}

impl RatingService {
    pub fn new(rating_repo: Arc<dyn RatingRepository>) -> Self {
        Self { rating_repo }
    }

    /// Submit or overwrite a user's rating for a movie. Returns the movie's
    /// new average rating.
    pub async fn rate_movie(&self, user_id: &Uuid, movie_id: &Uuid, value: i32) -> AppResult<f32> {
        Validator::validate_rating_value(value)?;

        let average = self
            .rating_repo
            .upsert_and_refresh_average(movie_id, user_id, value)
            .await?;

        log_info!(
            "User {} rated movie {} with {} (average now {:.2})",
            user_id,
            movie_id,
            value,
            average
        );
        Ok(average)
    }

    pub async fn get_user_rating(
        &self,
        user_id: &Uuid,
        movie_id: &Uuid,
    ) -> AppResult<Option<Rating>> {
        self.rating_repo.find(movie_id, user_id).await
    }
}
