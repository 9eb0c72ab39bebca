pub mod repository;

pub use repository::MediaRepositoryImpl;
