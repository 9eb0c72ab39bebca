pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use tokio::task;

use modules::{
    media::{application::MediaService, infrastructure::MediaRepositoryImpl, MediaRepository},
    movies::{
        application::MovieService, infrastructure::MovieRepositoryImpl, MovieRepository,
    },
    ranking::{
        domain::repository::MovieRankRepository, infrastructure::MovieRankRepositoryImpl,
        service::RankingService,
    },
    ratings::{
        application::RatingService, infrastructure::RatingRepositoryImpl, RatingRepository,
    },
    reviews::{
        application::ReviewService, infrastructure::ReviewRepositoryImpl, ReviewRepository,
    },
    users::{application::UserService, infrastructure::UserRepositoryImpl, UserRepository},
};
use shared::errors::AppResult;
use shared::Database;

/// The wired service graph the HTTP layer talks to.
pub struct AppServices {
    pub movies: Arc<MovieService>,
    pub ratings: Arc<RatingService>,
    pub reviews: Arc<ReviewService>,
    pub ranking: Arc<RankingService>,
    pub users: Arc<UserService>,
    pub media: Arc<MediaService>,
}

impl AppServices {
    /// Wire repositories and services onto an existing database handle.
    pub fn build(database: Arc<Database>) -> Self {
        let movie_repo: Arc<dyn MovieRepository> =
            Arc::new(MovieRepositoryImpl::new(Arc::clone(&database)));
        let rating_repo: Arc<dyn RatingRepository> =
            Arc::new(RatingRepositoryImpl::new(Arc::clone(&database)));
        let review_repo: Arc<dyn ReviewRepository> =
            Arc::new(ReviewRepositoryImpl::new(Arc::clone(&database)));
        let rank_repo: Arc<dyn MovieRankRepository> =
            Arc::new(MovieRankRepositoryImpl::new(Arc::clone(&database)));
        let user_repo: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(Arc::clone(&database)));
        let media_repo: Arc<dyn MediaRepository> =
            Arc::new(MediaRepositoryImpl::new(Arc::clone(&database)));

        Self {
            movies: Arc::new(MovieService::new(movie_repo)),
            ratings: Arc::new(RatingService::new(rating_repo)),
            reviews: Arc::new(ReviewService::new(review_repo)),
            ranking: Arc::new(RankingService::new(rank_repo)),
            users: Arc::new(UserService::new(user_repo)),
            media: Arc::new(MediaService::new(media_repo)),
        }
    }
}

/// Full startup: environment, logging, pool, migrations, service wiring and
/// the initial rank batch.
pub async fn initialize() -> AppResult<AppServices> {
    dotenvy::dotenv().ok();
    shared::utils::logger::init_logger();

    let database = Arc::new(Database::new()?);

    {
        let database = Arc::clone(&database);
        task::spawn_blocking(move || database.run_migrations()).await??;
    }

    let services = AppServices::build(database);

    // Ranks may be stale after a restart or reseed; refresh them now. A
    // failure here leaves the previous ranks in place and is not fatal.
    if let Err(e) = services.ranking.recompute_all_ranks().await {
        log::error!("Initial rank recomputation failed: {}", e);
    }

    Ok(services)
}
