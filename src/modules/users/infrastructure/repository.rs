use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::users::domain::entities::{NewUser, User};
use crate::modules::users::domain::repository::UserRepository;
use crate::schema::users;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<User> {
            let mut conn = db.get_connection()?;
            let saved = diesel::insert_into(users::table)
                .values(&user)
                .get_result::<User>(&mut conn)?;
            Ok(saved)
        })
        .await?
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<Option<User>> {
            let mut conn = db.get_connection()?;
            let user = users::table
                .filter(users::id.eq(id))
                .first::<User>(&mut conn)
                .optional()?;
            Ok(user)
        })
        .await?
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let email = email.to_string();

        task::spawn_blocking(move || -> AppResult<Option<User>> {
            let mut conn = db.get_connection()?;
            let user = users::table
                .filter(users::email.eq(&email))
                .first::<User>(&mut conn)
                .optional()?;
            Ok(user)
        })
        .await?
    }

    async fn set_avatar(&self, user_id: &Uuid, media_id: Option<Uuid>) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = *user_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(users::table.filter(users::id.eq(user_id)))
                .set(users::avatar_media_id.eq(media_id))
                .execute(&mut conn)?;
            if updated == 0 {
                return Err(AppError::NotFound(format!(
                    "User with ID {} not found",
                    user_id
                )));
            }
            Ok(())
        })
        .await?
    }
}
