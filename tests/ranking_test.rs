/// Ranking batch tests - database operations
///
/// Tests cover:
/// - Rank ordering by (review_count, average_rating, created_at, id)
/// - Ranks forming a gapless permutation
/// - Determinism across repeated runs
mod utils;

use utils::{db, factories};

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn ranks_follow_review_count_then_average() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let services = db::test_services();
    let owner = factories::seed_user(&services).await;

    // Three movies: review counts [5, 5, 2], averages [4, 5, 3].
    let busy_good = factories::seed_movie(&services, &owner.id).await;
    let busy_great = factories::seed_movie(&services, &owner.id).await;
    let quiet = factories::seed_movie(&services, &owner.id).await;

    let mut reviewers = Vec::new();
    for _ in 0..5 {
        reviewers.push(factories::seed_user(&services).await);
    }

    for reviewer in &reviewers {
        services
            .reviews
            .create_review(&reviewer.id, &busy_good.id, "Seen it.".to_string())
            .await
            .unwrap();
        services
            .reviews
            .create_review(&reviewer.id, &busy_great.id, "Seen it too.".to_string())
            .await
            .unwrap();
    }
    for reviewer in reviewers.iter().take(2) {
        services
            .reviews
            .create_review(&reviewer.id, &quiet.id, "Niche.".to_string())
            .await
            .unwrap();
    }

    services
        .ratings
        .rate_movie(&reviewers[0].id, &busy_good.id, 4)
        .await
        .unwrap();
    services
        .ratings
        .rate_movie(&reviewers[0].id, &busy_great.id, 5)
        .await
        .unwrap();
    services
        .ratings
        .rate_movie(&reviewers[0].id, &quiet.id, 3)
        .await
        .unwrap();

    services.ranking.recompute_all_ranks().await.unwrap();

    assert_eq!(services.movies.get_movie(&busy_great.id).await.unwrap().rank, 1);
    assert_eq!(services.movies.get_movie(&busy_good.id).await.unwrap().rank, 2);
    assert_eq!(services.movies.get_movie(&quiet.id).await.unwrap().rank, 3);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn ranks_are_a_gapless_permutation_and_stable_across_runs() {
    let _guard = db::acquire_test_lock();
    db::clean_test_db();
    let services = db::test_services();
    let owner = factories::seed_user(&services).await;

    let mut ids = Vec::new();
    for _ in 0..6 {
        ids.push(factories::seed_movie(&services, &owner.id).await.id);
    }

    services.ranking.recompute_all_ranks().await.unwrap();

    let mut first_run = Vec::new();
    for id in &ids {
        first_run.push(services.movies.get_movie(id).await.unwrap().rank);
    }

    let mut sorted = first_run.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=6).collect::<Vec<i32>>());

    services.ranking.recompute_all_ranks().await.unwrap();
    for (id, expected) in ids.iter().zip(&first_run) {
        assert_eq!(services.movies.get_movie(id).await.unwrap().rank, *expected);
    }
}
