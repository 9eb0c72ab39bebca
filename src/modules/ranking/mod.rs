/// Ranking bounded context
///
/// Batch dense-rank assignment over the whole movie table, ordered by
/// (review_count desc, average_rating desc, created_at desc, id asc). Runs
/// at startup and after bulk reseeds; ranks are allowed to go stale between
/// runs.
///
/// Architecture:
/// - Domain: rank entry + pure ordering, repository trait
/// - Infrastructure: Diesel-based repository implementation
/// - Service: the batch recompute entry point
pub mod domain;
pub mod infrastructure;
pub mod service;

// Re-exports for easy access
pub use domain::{
    entities::{rank_assignments, RankEntry},
    repository::MovieRankRepository,
};
pub use infrastructure::MovieRankRepositoryImpl;
pub use service::RankingService;
