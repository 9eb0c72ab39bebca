use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::movies::domain::entities::Movie;
use crate::modules::movies::domain::value_objects::MovieListFilter;
use crate::shared::application::PaginatedResult;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Movie>>;
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Movie>>;
    /// Single filtered/sorted/paginated read; `total_count` covers the whole
    /// filter match, not just the returned page.
    async fn list(&self, filter: &MovieListFilter) -> AppResult<PaginatedResult<Movie>>;
    async fn suggest_titles(&self, query: &str, limit: i64) -> AppResult<Vec<Movie>>;
    async fn insert(&self, movie: &Movie) -> AppResult<Movie>;
    async fn update(&self, movie: &Movie) -> AppResult<Movie>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
