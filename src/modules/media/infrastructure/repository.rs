use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::media::domain::entities::{MediaObject, MediaSummary, NewMedia};
use crate::modules::media::domain::repository::MediaRepository;
use crate::schema::media;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

pub struct MediaRepositoryImpl {
    db: Arc<Database>,
}

impl MediaRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MediaRepository for MediaRepositoryImpl {
    async fn store(&self, media: NewMedia) -> AppResult<MediaSummary> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<MediaSummary> {
            let mut conn = db.get_connection()?;
            // Return the metadata columns only; no point hauling the
            // payload back out.
            let summary = diesel::insert_into(media::table)
                .values(&media)
                .returning((
                    media::id,
                    media::content_type,
                    media::size_bytes,
                    media::owner_user_id,
                    media::created_at,
                ))
                .get_result::<MediaSummary>(&mut conn)?;
            Ok(summary)
        })
        .await?
    }

    async fn load(&self, id: &Uuid) -> AppResult<Option<MediaObject>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<Option<MediaObject>> {
            let mut conn = db.get_connection()?;
            let object = media::table
                .filter(media::id.eq(id))
                .first::<MediaObject>(&mut conn)
                .optional()?;
            Ok(object)
        })
        .await?
    }

    async fn delete(&self, id: &Uuid, owner_user_id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;
        let owner_user_id = *owner_user_id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let deleted = diesel::delete(
                media::table
                    .filter(media::id.eq(id))
                    .filter(media::owner_user_id.eq(owner_user_id)),
            )
            .execute(&mut conn)?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!(
                    "Media with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }
}
