/// Review counter tests - database operations
///
/// Tests cover:
/// - Counter increments/decrements paired with review writes
/// - Owner-scoped lookup semantics (foreign rows read as missing)
/// - Paginated listing per movie
mod utils;

use reelward::shared::application::PaginationParams;
use reelward::shared::errors::AppError;
use utils::{db, factories};
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn create_and_delete_round_trip_the_counter() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let services = db::test_services();

    let owner = factories::seed_user(&services).await;
    let reviewer = factories::seed_user(&services).await;
    let movie = factories::seed_movie(&services, &owner.id).await;

    let review = services
        .reviews
        .create_review(&reviewer.id, &movie.id, "Slow burn, worth it.".to_string())
        .await
        .unwrap();

    let stored = services.movies.get_movie(&movie.id).await.unwrap();
    assert_eq!(stored.review_count, 1);

    services
        .reviews
        .delete_review(&reviewer.id, &review.id)
        .await
        .unwrap();

    let stored = services.movies.get_movie(&movie.id).await.unwrap();
    assert_eq!(stored.review_count, 0);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn reviewing_an_unknown_movie_is_not_found() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let services = db::test_services();

    let reviewer = factories::seed_user(&services).await;
    let err = services
        .reviews
        .create_review(&reviewer.id, &Uuid::new_v4(), "No movie here.".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn foreign_review_reads_as_missing_and_leaves_the_counter_alone() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let services = db::test_services();

    let owner = factories::seed_user(&services).await;
    let reviewer = factories::seed_user(&services).await;
    let stranger = factories::seed_user(&services).await;
    let movie = factories::seed_movie(&services, &owner.id).await;

    let review = services
        .reviews
        .create_review(&reviewer.id, &movie.id, "Mine.".to_string())
        .await
        .unwrap();

    let err = services
        .reviews
        .delete_review(&stranger.id, &review.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = services
        .reviews
        .update_review(&stranger.id, &review.id, "Hijacked.".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let stored = services.movies.get_movie(&movie.id).await.unwrap();
    assert_eq!(stored.review_count, 1);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn second_delete_is_not_found() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let services = db::test_services();

    let owner = factories::seed_user(&services).await;
    let reviewer = factories::seed_user(&services).await;
    let movie = factories::seed_movie(&services, &owner.id).await;

    let review = services
        .reviews
        .create_review(&reviewer.id, &movie.id, "Once.".to_string())
        .await
        .unwrap();

    services
        .reviews
        .delete_review(&reviewer.id, &review.id)
        .await
        .unwrap();
    let err = services
        .reviews
        .delete_review(&reviewer.id, &review.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn updating_content_does_not_touch_the_counter() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let services = db::test_services();

    let owner = factories::seed_user(&services).await;
    let reviewer = factories::seed_user(&services).await;
    let movie = factories::seed_movie(&services, &owner.id).await;

    let review = services
        .reviews
        .create_review(&reviewer.id, &movie.id, "First draft.".to_string())
        .await
        .unwrap();

    let updated = services
        .reviews
        .update_review(&reviewer.id, &review.id, "Second draft.".to_string())
        .await
        .unwrap();
    assert_eq!(updated.content, "Second draft.");
    assert_eq!(updated.id, review.id);

    let stored = services.movies.get_movie(&movie.id).await.unwrap();
    assert_eq!(stored.review_count, 1);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn listing_returns_newest_first_with_full_total() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let services = db::test_services();

    let owner = factories::seed_user(&services).await;
    let movie = factories::seed_movie(&services, &owner.id).await;

    for i in 0..3 {
        let reviewer = factories::seed_user(&services).await;
        services
            .reviews
            .create_review(&reviewer.id, &movie.id, format!("Take {}", i))
            .await
            .unwrap();
    }

    let page = services
        .reviews
        .list_reviews(&movie.id, PaginationParams::new(1, 2))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, 3);
    assert_eq!(page.total_pages, 2);
    assert!(page.items[0].created_at >= page.items[1].created_at);
}
