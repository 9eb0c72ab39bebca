pub mod movie_filter;

pub use movie_filter::{MovieListFilter, ReviewScope, SortKey};
