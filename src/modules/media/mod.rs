/// Media bounded context
///
/// Opaque binary blobs (posters, avatars) stored in the database. Callers
/// get metadata back from writes; the payload only travels on an explicit
/// load.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::MediaService;
pub use domain::{
    entities::{MediaObject, MediaSummary, NewMedia},
    repository::MediaRepository,
};
pub use infrastructure::MediaRepositoryImpl;
