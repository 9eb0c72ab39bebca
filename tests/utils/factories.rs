/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::NaiveDate;
use reelward::modules::movies::application::CreateMovie;
use reelward::modules::movies::domain::entities::Movie;
use reelward::modules::users::domain::entities::User;
use reelward::AppServices;
use uuid::Uuid;

pub struct MovieFactory {
    title: String,
    release_date: NaiveDate,
    synopsis: String,
    trailer_url: Option<String>,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            title: format!("Test Movie {}", rand::random::<u32>()),
            release_date: NaiveDate::from_ymd_opt(2001, 6, 15).unwrap(),
            synopsis: "A test movie nobody has seen.".to_string(),
            trailer_url: None,
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_release_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.release_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn with_synopsis(mut self, synopsis: &str) -> Self {
        self.synopsis = synopsis.to_string();
        self
    }

    pub fn with_trailer(mut self, url: &str) -> Self {
        self.trailer_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> CreateMovie {
        CreateMovie {
            title: self.title,
            release_date: self.release_date,
            synopsis: self.synopsis,
            trailer_url: self.trailer_url,
            poster_media_id: None,
        }
    }
}

/// Register a user with a unique email.
pub async fn seed_user(services: &AppServices) -> User {
    let salt = rand::random::<u32>();
    services
        .users
        .register_user(
            format!("User {}", salt),
            format!("user{}@example.com", salt),
            "hashed-password".to_string(),
        )
        .await
        .expect("Failed to seed user")
}

/// Create a movie owned by `owner` with default factory data.
pub async fn seed_movie(services: &AppServices, owner: &Uuid) -> Movie {
    services
        .movies
        .create_movie(owner, MovieFactory::new().build())
        .await
        .expect("Failed to seed movie")
}
