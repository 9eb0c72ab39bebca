pub mod entities;
pub mod repository;

pub use entities::{average_value, Rating};
pub use repository::RatingRepository;
