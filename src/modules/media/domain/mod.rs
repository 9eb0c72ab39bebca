pub mod entities;
pub mod repository;

pub use entities::{MediaObject, MediaSummary, NewMedia};
pub use repository::MediaRepository;
