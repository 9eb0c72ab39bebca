use std::sync::Arc;
use uuid::Uuid;

use crate::log_info;
use crate::modules::reviews::domain::{entities::Review, repository::ReviewRepository};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repo }
    }

    pub async fn create_review(
        &self,
        user_id: &Uuid,
        movie_id: &Uuid,
        content: String,
    ) -> AppResult<Review> {
        Validator::validate_review_content(&content)?;

        let review = Review::new(*movie_id, *user_id, content);
        let saved = self.review_repo.create(&review).await?;

        log_info!("User {} reviewed movie {}", user_id, movie_id);
        Ok(saved)
    }

    pub async fn update_review(
        &self,
        user_id: &Uuid,
        review_id: &Uuid,
        content: String,
    ) -> AppResult<Review> {
        Validator::validate_review_content(&content)?;
        self.review_repo
            .update_content(review_id, user_id, &content)
            .await
    }

    /// Deleting twice is not idempotent: the second call is NotFound, since
    /// the owner-scoped lookup no longer matches.
    pub async fn delete_review(&self, user_id: &Uuid, review_id: &Uuid) -> AppResult<()> {
        self.review_repo.delete(review_id, user_id).await?;
        log_info!("User {} deleted review {}", user_id, review_id);
        Ok(())
    }

    pub async fn list_reviews(
        &self,
        movie_id: &Uuid,
        pagination: PaginationParams,
    ) -> AppResult<PaginatedResult<Review>> {
        Validator::validate_page_size(pagination.page, pagination.page_size)?;
        self.review_repo.list_for_movie(movie_id, &pagination).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::reviews::domain::repository::MockReviewRepository;
    use crate::shared::errors::AppError;

    #[tokio::test]
    async fn blank_content_is_rejected_before_the_repository() {
        let mut repo = MockReviewRepository::new();
        repo.expect_create().never();

        let service = ReviewService::new(Arc::new(repo));
        let err = service
            .create_review(&Uuid::new_v4(), &Uuid::new_v4(), "  \n ".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn deleting_a_foreign_review_reads_as_missing() {
        let mut repo = MockReviewRepository::new();
        repo.expect_delete()
            .returning(|review_id, _| {
                Err(AppError::NotFound(format!(
                    "Review with ID {} not found",
                    review_id
                )))
            });

        let service = ReviewService::new(Arc::new(repo));
        let err = service
            .delete_review(&Uuid::new_v4(), &Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_keeps_ownership_in_the_lookup() {
        let user = Uuid::new_v4();
        let review = Review::new(Uuid::new_v4(), user, "Tense from the first frame.".to_string());
        let expected = review.clone();
        let mut repo = MockReviewRepository::new();
        repo.expect_update_content()
            .withf(move |_, caller, _| *caller == user)
            .returning(move |_, _, _| Ok(expected.clone()));

        let service = ReviewService::new(Arc::new(repo));
        let updated = service
            .update_review(&user, &review.id, "Tense from the first frame.".to_string())
            .await
            .unwrap();
        assert_eq!(updated.user_id, user);
    }
}
