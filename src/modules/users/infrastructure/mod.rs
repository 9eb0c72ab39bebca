pub mod repository;

pub use repository::UserRepositoryImpl;
