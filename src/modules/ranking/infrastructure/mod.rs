pub mod repository;

pub use repository::MovieRankRepositoryImpl;
