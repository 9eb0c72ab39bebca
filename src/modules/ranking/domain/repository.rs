use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::ranking::domain::entities::RankEntry;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRankRepository: Send + Sync {
    /// Ranking projection of every movie.
    async fn load_entries(&self) -> AppResult<Vec<RankEntry>>;

    /// Persist rank assignments. Each row update is individually atomic;
    /// the batch deliberately does not run inside one long transaction.
    /// Returns the number of rows updated.
    async fn store_ranks(&self, assignments: &[(Uuid, i32)]) -> AppResult<usize>;
}
