use std::sync::Arc;

use crate::modules::ranking::domain::{entities::rank_assignments, repository::MovieRankRepository};
use crate::shared::errors::AppResult;
use crate::{log_info, log_warn};

pub struct RankingService {
    rank_repo: Arc<dyn MovieRankRepository>,
}

impl RankingService {
    pub fn new(rank_repo: Arc<dyn MovieRankRepository>) -> Self {
        Self { rank_repo }
    }

    /// Recompute every movie's rank from scratch. Run at startup and after
    /// bulk reseeds; between runs the stored ranks may lag behind rating and
    /// review activity, which is accepted.
    pub async fn recompute_all_ranks(&self) -> AppResult<()> {
        let entries = self.rank_repo.load_entries().await?;
        if entries.is_empty() {
            log_info!("Rank recomputation skipped: no movies");
            return Ok(());
        }

        let total = entries.len();
        let assignments = rank_assignments(entries);
        let updated = self.rank_repo.store_ranks(&assignments).await?;

        if updated != total {
            // Movies deleted mid-batch simply drop out of the writeback.
            log_warn!(
                "Rank recomputation updated {} of {} movies",
                updated,
                total
            );
        } else {
            log_info!("Recomputed ranks for {} movies", updated);
        }
        Ok(())
    }
}
