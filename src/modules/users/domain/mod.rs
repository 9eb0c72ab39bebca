pub mod entities;
pub mod repository;

pub use entities::{NewUser, User, UserRole};
pub use repository::UserRepository;
