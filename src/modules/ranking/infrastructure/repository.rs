use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::ranking::domain::entities::RankEntry;
use crate::modules::ranking::domain::repository::MovieRankRepository;
use crate::schema::movies;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::database::Database;

pub struct MovieRankRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRankRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRankRepository for MovieRankRepositoryImpl {
    async fn load_entries(&self) -> AppResult<Vec<RankEntry>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(
            move || -> AppResult<Vec<(Uuid, i32, f32, DateTime<Utc>)>> {
                let mut conn = db.get_connection()?;
                let rows = movies::table
                    .select((
                        movies::id,
                        movies::review_count,
                        movies::average_rating,
                        movies::created_at,
                    ))
                    .load(&mut conn)?;
                Ok(rows)
            },
        )
        .await??;

        Ok(rows
            .into_iter()
            .map(|(movie_id, review_count, average_rating, created_at)| RankEntry {
                movie_id,
                review_count,
                average_rating,
                created_at,
            })
            .collect())
    }

    async fn store_ranks(&self, assignments: &[(Uuid, i32)]) -> AppResult<usize> {
        let db = Arc::clone(&self.db);
        let assignments = assignments.to_vec();

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;

            // One short-lived statement per row; no long table-wide
            // transaction across the writeback.
            let mut updated = 0;
            for (movie_id, rank) in assignments {
                updated += diesel::update(movies::table.filter(movies::id.eq(movie_id)))
                    .set(movies::rank.eq(rank))
                    .execute(&mut conn)?;
            }
            Ok(updated)
        })
        .await?
    }
}
