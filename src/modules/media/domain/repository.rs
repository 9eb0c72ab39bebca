use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::media::domain::entities::{MediaObject, MediaSummary, NewMedia};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn store(&self, media: NewMedia) -> AppResult<MediaSummary>;
    async fn load(&self, id: &Uuid) -> AppResult<Option<MediaObject>>;
    /// Owner-scoped delete; a blob owned by someone else reads as missing.
    async fn delete(&self, id: &Uuid, owner_user_id: &Uuid) -> AppResult<()>;
}
