/// Reviews bounded context
///
/// Review rows plus the denormalized review counter on the movie. Every
/// insert/delete is paired with the counter mutation in the same
/// transaction, so the counter never drifts and never goes negative.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::ReviewService;
pub use domain::{entities::Review, repository::ReviewRepository};
pub use infrastructure::ReviewRepositoryImpl;
