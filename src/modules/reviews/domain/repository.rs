use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::reviews::domain::entities::Review;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert the review and bump the movie's review counter in one
    /// transaction. NotFound when the movie does not exist.
    async fn create(&self, review: &Review) -> AppResult<Review>;

    /// Overwrite content only. The lookup is scoped to (id, user_id): a
    /// review owned by someone else reads as missing.
    async fn update_content(
        &self,
        review_id: &Uuid,
        user_id: &Uuid,
        content: &str,
    ) -> AppResult<Review>;

    /// Delete the review and decrement the movie's counter in one
    /// transaction. Same owner-scoped lookup as `update_content`.
    async fn delete(&self, review_id: &Uuid, user_id: &Uuid) -> AppResult<()>;

    /// Reviews for a movie, newest first.
    async fn list_for_movie(
        &self,
        movie_id: &Uuid,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResult<Review>>;
}
