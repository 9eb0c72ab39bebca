/// Users bounded context
///
/// Account rows only. Credential hashing and token issuance live at the
/// HTTP boundary; this context stores an opaque password hash and the
/// authenticated caller's identity arrives as a plain user id.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::UserService;
pub use domain::{
    entities::{NewUser, User, UserRole},
    repository::UserRepository,
};
pub use infrastructure::UserRepositoryImpl;
