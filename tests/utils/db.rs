/// Database test utilities with singleton pattern
///
/// Provides thread-safe access to test database with proper isolation
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use reelward::shared::Database;
use reelward::AppServices;
use std::sync::{Arc, Mutex, OnceLock};

type PgPool = Pool<ConnectionManager<PgConnection>>;

static DB_POOL: OnceLock<Arc<PgPool>> = OnceLock::new();

/// Get or create singleton database pool for tests
pub fn get_test_db_pool() -> Arc<PgPool> {
    DB_POOL
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let test_db_url = std::env::var("TEST_DATABASE_URL")
                .expect("TEST_DATABASE_URL must be set in .env for tests");

            let manager = ConnectionManager::<PgConnection>::new(test_db_url);
            let pool = Pool::builder()
                .max_size(10)
                .build(manager)
                .expect("Failed to create test database pool");

            Database::from_pool(pool.clone())
                .run_migrations()
                .expect("Failed to run migrations on test database");

            Arc::new(pool)
        })
        .clone()
}

/// Service graph wired onto the test pool
pub fn test_services() -> AppServices {
    let pool = get_test_db_pool();
    AppServices::build(Arc::new(Database::from_pool((*pool).clone())))
}

/// Clean all test tables - use at the start of each test
pub fn clean_test_db() {
    let pool = get_test_db_pool();
    let mut conn = pool.get().expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE ratings RESTART IDENTITY CASCADE")
        .execute(&mut conn)
        .expect("Failed to clean ratings");

    diesel::sql_query("TRUNCATE TABLE reviews RESTART IDENTITY CASCADE")
        .execute(&mut conn)
        .expect("Failed to clean reviews");

    diesel::sql_query("TRUNCATE TABLE movies RESTART IDENTITY CASCADE")
        .execute(&mut conn)
        .expect("Failed to clean movies");

    diesel::sql_query("TRUNCATE TABLE media RESTART IDENTITY CASCADE")
        .execute(&mut conn)
        .expect("Failed to clean media");

    diesel::sql_query("TRUNCATE TABLE users RESTART IDENTITY CASCADE")
        .execute(&mut conn)
        .expect("Failed to clean users");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> std::sync::MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
