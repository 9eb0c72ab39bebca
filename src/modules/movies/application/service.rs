use std::sync::Arc;
use uuid::Uuid;

use super::dto::{CreateMovie, UpdateMovie};
use crate::modules::movies::domain::{
    entities::Movie, repositories::MovieRepository, value_objects::MovieListFilter,
};
use crate::shared::application::PaginatedResult;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

const SUGGESTION_LIMIT: i64 = 5;

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    pub async fn create_movie(&self, user_id: &Uuid, payload: CreateMovie) -> AppResult<Movie> {
        Validator::validate_movie_title(&payload.title)?;
        if let Some(url) = &payload.trailer_url {
            Validator::validate_trailer_url(url)?;
        }

        if self.movie_repo.find_by_title(&payload.title).await?.is_some() {
            return Err(AppError::ValidationError(format!(
                "A movie titled '{}' already exists",
                payload.title
            )));
        }

        let movie = Movie::new(
            payload.title,
            payload.release_date,
            payload.synopsis,
            payload.trailer_url,
            payload.poster_media_id,
            *user_id,
        );

        let saved = self.movie_repo.insert(&movie).await?;
        log_info!("Created movie '{}' ({})", saved.title, saved.id);
        Ok(saved)
    }

    pub async fn get_movie(&self, id: &Uuid) -> AppResult<Movie> {
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))
    }

    pub async fn update_movie(
        &self,
        user_id: &Uuid,
        movie_id: &Uuid,
        changes: UpdateMovie,
    ) -> AppResult<Movie> {
        let mut movie = self.get_movie(movie_id).await?;

        // Movies are publicly listable, so a bad owner gets Forbidden rather
        // than NotFound.
        if !movie.is_created_by(user_id) {
            return Err(AppError::Forbidden(
                "Only the creator can modify a movie".to_string(),
            ));
        }

        if let Some(title) = changes.title {
            Validator::validate_movie_title(&title)?;
            if let Some(existing) = self.movie_repo.find_by_title(&title).await? {
                if existing.id != movie.id {
                    return Err(AppError::ValidationError(format!(
                        "A movie titled '{}' already exists",
                        title
                    )));
                }
            }
            movie.title = title;
        }
        if let Some(release_date) = changes.release_date {
            movie.release_date = release_date;
        }
        if let Some(synopsis) = changes.synopsis {
            movie.synopsis = synopsis;
        }
        if let Some(url) = changes.trailer_url {
            Validator::validate_trailer_url(&url)?;
            movie.trailer_url = Some(url);
        }
        if let Some(poster) = changes.poster_media_id {
            movie.poster_media_id = Some(poster);
        }
        movie.updated_at = chrono::Utc::now();

        self.movie_repo.update(&movie).await
    }

    pub async fn delete_movie(&self, user_id: &Uuid, movie_id: &Uuid) -> AppResult<()> {
        let movie = self.get_movie(movie_id).await?;
        if !movie.is_created_by(user_id) {
            return Err(AppError::Forbidden(
                "Only the creator can delete a movie".to_string(),
            ));
        }

        // Reviews and ratings go with the movie (FK cascade).
        self.movie_repo.delete(movie_id).await?;
        log_info!("Deleted movie '{}' ({})", movie.title, movie.id);
        Ok(())
    }

    pub async fn list_movies(&self, filter: MovieListFilter) -> AppResult<PaginatedResult<Movie>> {
        Validator::validate_page_size(filter.pagination.page, filter.pagination.page_size)?;
        if let Some(min_stars) = filter.min_stars {
            Validator::validate_min_stars(min_stars)?;
        }

        log_debug!(
            "Listing movies (scope: {}, sort: {}, page: {})",
            filter.review_scope,
            filter.sort,
            filter.pagination.page
        );
        self.movie_repo.list(&filter).await
    }

    /// Title autocompletion. A blank query returns nothing without touching
    /// the database.
    pub async fn suggest_titles(&self, query: &str) -> AppResult<Vec<Movie>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.movie_repo.suggest_titles(query, SUGGESTION_LIMIT).await
    }
}
