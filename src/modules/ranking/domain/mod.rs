pub mod entities;
pub mod repository;

pub use entities::{rank_assignments, RankEntry};
pub use repository::MovieRankRepository;
