use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::{exists, not};
use diesel::pg::Pg;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::modules::movies::domain::{
    entities::Movie,
    repositories::MovieRepository,
    value_objects::{MovieListFilter, ReviewScope, SortKey},
};
use crate::modules::movies::infrastructure::models::{MovieChangeset, MovieModel, NewMovie};
use crate::schema::{movies, reviews};
use crate::shared::application::PaginatedResult;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::Database;

type BoxedMovieQuery = movies::BoxedQuery<'static, Pg>;

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Translate a listing filter into a boxed query. Called twice per
    /// listing (count + page) since boxed queries cannot be cloned.
    fn filtered(filter: &MovieListFilter) -> BoxedMovieQuery {
        let mut query = movies::table.into_boxed();

        if let Some(q) = filter.query.as_deref() {
            let q = q.trim();
            if !q.is_empty() {
                let pattern = format!("%{}%", q);
                query = query.filter(
                    movies::title
                        .ilike(pattern.clone())
                        .or(movies::synopsis.ilike(pattern)),
                );
            }
        }

        if let Some(min_stars) = filter.min_stars {
            if min_stars > 0 {
                query = query.filter(movies::average_rating.ge(min_stars as f32));
            }
        }

        // Review scope only applies when the caller is known.
        if let Some(user_id) = filter.requesting_user_id {
            let authored = reviews::table
                .filter(reviews::movie_id.eq(movies::id))
                .filter(reviews::user_id.eq(user_id));
            match filter.review_scope {
                ReviewScope::All => {}
                ReviewScope::Mine => query = query.filter(exists(authored)),
                ReviewScope::NotMine => query = query.filter(not(exists(authored))),
            }
        }

        query
    }

    /// Apply the requested sort plus (created_at desc, id asc) tie-breaks so
    /// the ordering is total and page windows stay stable.
    fn ordered(query: BoxedMovieQuery, sort: SortKey) -> BoxedMovieQuery {
        match sort {
            SortKey::ReviewsDesc => query.order((
                movies::review_count.desc(),
                movies::created_at.desc(),
                movies::id.asc(),
            )),
            SortKey::RatingDesc => query.order((
                movies::average_rating.desc(),
                movies::created_at.desc(),
                movies::id.asc(),
            )),
            SortKey::ReleaseDesc => query.order((
                movies::release_date.desc(),
                movies::created_at.desc(),
                movies::id.asc(),
            )),
            SortKey::ReleaseAsc => query.order((
                movies::release_date.asc(),
                movies::created_at.desc(),
                movies::id.asc(),
            )),
            SortKey::UploadedDesc => query.order((movies::created_at.desc(), movies::id.asc())),
        }
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<MovieModel>> {
            let mut conn = db.get_connection()?;
            let m = movies::table
                .filter(movies::id.eq(id))
                .first::<MovieModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Movie::from))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);
        let title = title.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<MovieModel>> {
            let mut conn = db.get_connection()?;
            let m = movies::table
                .filter(movies::title.eq(&title))
                .first::<MovieModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Movie::from))
    }

    async fn list(&self, filter: &MovieListFilter) -> AppResult<PaginatedResult<Movie>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();
        let params = filter.pagination.clone();

        let (models, total) = task::spawn_blocking(move || -> AppResult<(Vec<MovieModel>, i64)> {
            let mut conn = db.get_connection()?;

            let total: i64 = Self::filtered(&filter).count().get_result(&mut conn)?;

            let rows = Self::ordered(Self::filtered(&filter), filter.sort)
                .offset(filter.pagination.offset())
                .limit(filter.pagination.limit())
                .load::<MovieModel>(&mut conn)?;

            Ok((rows, total))
        })
        .await??;

        let items = models.into_iter().map(Movie::from).collect();
        Ok(PaginatedResult::new(items, total as u64, &params))
    }

    async fn suggest_titles(&self, query: &str, limit: i64) -> AppResult<Vec<Movie>> {
        let db = Arc::clone(&self.db);
        let pattern = format!("%{}%", query.trim());

        let models = task::spawn_blocking(move || -> AppResult<Vec<MovieModel>> {
            let mut conn = db.get_connection()?;
            let rows = movies::table
                .filter(movies::title.ilike(pattern))
                .order((
                    movies::review_count.desc(),
                    movies::average_rating.desc(),
                    movies::created_at.desc(),
                ))
                .limit(limit)
                .load::<MovieModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Movie::from).collect())
    }

    async fn insert(&self, movie: &Movie) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);
        let new_row = NewMovie::from_entity(movie);

        let saved = task::spawn_blocking(move || -> AppResult<MovieModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(movies::table)
                .values(&new_row)
                .get_result::<MovieModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(saved.into())
    }

    async fn update(&self, movie: &Movie) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);
        let id = movie.id;
        let changes = MovieChangeset::from_entity(movie);

        let saved = task::spawn_blocking(move || -> AppResult<MovieModel> {
            let mut conn = db.get_connection()?;
            diesel::update(movies::table.filter(movies::id.eq(id)))
                .set(&changes)
                .get_result::<MovieModel>(&mut conn)
                .optional()?
                .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))
        })
        .await??;

        Ok(saved.into())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let deleted =
                diesel::delete(movies::table.filter(movies::id.eq(id))).execute(&mut conn)?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!("Movie with ID {} not found", id)));
            }
            Ok(())
        })
        .await?
    }
}
