use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::users::domain::entities::{NewUser, User};
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> AppResult<User>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    /// NotFound when the user does not exist.
    async fn set_avatar(&self, user_id: &Uuid, media_id: Option<Uuid>) -> AppResult<()>;
}
