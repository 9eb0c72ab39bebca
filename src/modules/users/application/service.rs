use std::sync::Arc;
use uuid::Uuid;

use crate::log_info;
use crate::modules::users::domain::{
    entities::{NewUser, User},
    repository::UserRepository,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Create an account. `password_hash` is already hashed by the caller.
    pub async fn register_user(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<User> {
        Validator::validate_user_name(&name)?;
        Validator::validate_email(&email)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::ValidationError(format!(
                "An account with email '{}' already exists",
                email
            )));
        }

        let saved = self
            .user_repo
            .insert(NewUser::new(name, email, password_hash))
            .await?;
        log_info!("Registered user {} ({})", saved.name, saved.id);
        Ok(saved)
    }

    pub async fn get_user(&self, id: &Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", id)))
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.user_repo.find_by_email(email).await
    }

    pub async fn set_avatar(&self, user_id: &Uuid, media_id: Option<Uuid>) -> AppResult<()> {
        self.user_repo.set_avatar(user_id, media_id).await
    }
}
