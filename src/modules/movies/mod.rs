/// Movies bounded context
///
/// Owns the movie catalog: CRUD with ownership rules, the filtered/sorted/
/// paginated listing engine and title suggestions. The derived aggregate
/// fields on a movie (average_rating, review_count, rank) are written by the
/// ratings, reviews and ranking contexts, never from here.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{CreateMovie, MovieService, UpdateMovie};
pub use domain::{
    entities::Movie,
    repositories::MovieRepository,
    value_objects::{MovieListFilter, ReviewScope, SortKey},
};
pub use infrastructure::MovieRepositoryImpl;
