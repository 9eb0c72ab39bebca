/// Ratings bounded context
///
/// One rating row per (movie, user), upserted. Every write refreshes the
/// movie's denormalized average inside the same transaction, so the average
/// never drifts from the rating rows.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::RatingService;
pub use domain::{entities::Rating, repository::RatingRepository};
pub use infrastructure::RatingRepositoryImpl;
