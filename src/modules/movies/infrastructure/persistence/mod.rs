pub mod movie_repository_impl;

pub use movie_repository_impl::MovieRepositoryImpl;
