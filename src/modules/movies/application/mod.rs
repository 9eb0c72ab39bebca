pub mod dto;
pub mod service;

pub use dto::{CreateMovie, UpdateMovie};
pub use service::MovieService;
