use std::sync::Arc;
use uuid::Uuid;

use crate::log_info;
use crate::modules::media::domain::{
    entities::{MediaObject, MediaSummary, NewMedia},
    repository::MediaRepository,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

pub struct MediaService {
    media_repo: Arc<dyn MediaRepository>,
}

impl MediaService {
    pub fn new(media_repo: Arc<dyn MediaRepository>) -> Self {
        Self { media_repo }
    }

    pub async fn store_media(
        &self,
        owner_user_id: &Uuid,
        content_type: &str,
        data: Vec<u8>,
    ) -> AppResult<MediaSummary> {
        Validator::validate_media(content_type, data.len())?;

        let media = NewMedia::new(content_type.to_string(), data, Some(*owner_user_id));
        let saved = self.media_repo.store(media).await?;

        log_info!(
            "Stored {} blob {} ({} bytes) for user {}",
            saved.content_type,
            saved.id,
            saved.size_bytes,
            owner_user_id
        );
        Ok(saved)
    }

    pub async fn load_media(&self, id: &Uuid) -> AppResult<Option<MediaObject>> {
        self.media_repo.load(id).await
    }

    pub async fn delete_media(&self, user_id: &Uuid, id: &Uuid) -> AppResult<()> {
        self.media_repo.delete(id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::media::domain::repository::MockMediaRepository;
    use crate::shared::errors::AppError;

    #[tokio::test]
    async fn unsupported_content_type_is_rejected() {
        let mut repo = MockMediaRepository::new();
        repo.expect_store().never();

        let service = MediaService::new(Arc::new(repo));
        let err = service
            .store_media(&Uuid::new_v4(), "application/zip", vec![1, 2, 3])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn empty_payload_is_rejected() {
        let mut repo = MockMediaRepository::new();
        repo.expect_store().never();

        let service = MediaService::new(Arc::new(repo));
        let err = service
            .store_media(&Uuid::new_v4(), "image/png", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
