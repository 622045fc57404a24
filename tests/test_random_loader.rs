mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::{detail, FakeCatalog};
use mealdb_explorer::explorer::{
    fetch::{fetch_random_batch, MAX_RANDOM_COUNT},
    Explorer, UiStatus,
};
use mealdb_explorer::ExplorerError;
use pretty_assertions::assert_eq;

fn six_batches() -> Vec<Vec<mealdb_explorer::client::MealDetail>> {
    ["a", "b", "c", "d", "e", "f"]
        .iter()
        .map(|id| vec![detail(id)])
        .collect()
}

#[tokio::test]
async fn six_random_meals_in_request_order() {
    common::init_test_logging();
    let catalog = FakeCatalog::new()
        .with_random(six_batches())
        .with_reverse_random_latency();

    let meals = fetch_random_batch(&catalog, 6).await.unwrap();

    let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e", "f"]);
    assert_eq!(catalog.random_calls.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn empty_batch_is_reported_not_raised() {
    let catalog = FakeCatalog::new().with_random(vec![vec![], vec![]]);
    let explorer = Explorer::new(Arc::new(catalog), 2);

    let view = explorer.load_default_random().await;

    assert!(view.meals.is_empty());
    assert_eq!(
        view.status,
        UiStatus::Error("Could not load random recipes. Please try again.".to_string())
    );
}

#[tokio::test]
async fn one_failed_fetch_fails_the_batch() {
    let catalog = FakeCatalog::new()
        .with_random(six_batches())
        .with_failing_random_call(3);
    let explorer = Explorer::new(Arc::new(catalog), 6);

    let view = explorer.load_default_random().await;

    assert!(view.meals.is_empty());
    assert_eq!(
        view.status,
        UiStatus::Error("Failed to load random recipes. Please check your connection.".to_string())
    );
}

#[tokio::test]
async fn zero_count_is_rejected_without_requests() {
    let catalog = FakeCatalog::new();

    let err = fetch_random_batch(&catalog, 0).await.unwrap_err();

    assert!(matches!(err, ExplorerError::Validation(_)));
    assert_eq!(catalog.total_calls(), 0);
}

#[tokio::test]
async fn oversized_batch_is_rejected_without_requests() {
    let catalog = Arc::new(FakeCatalog::new().with_random(six_batches()));
    let explorer = Explorer::new(catalog.clone(), 6);

    let view = explorer.load_random(50_000).await;

    assert_eq!(
        view.status,
        UiStatus::Error(format!(
            "Random batch size must be between 1 and {}",
            MAX_RANDOM_COUNT
        ))
    );
    assert_eq!(catalog.total_calls(), 0);

    let at_limit = fetch_random_batch(catalog.as_ref(), MAX_RANDOM_COUNT).await.unwrap();
    assert_eq!(at_limit.len(), 6, "calls past the scripted batches return nothing");
    assert_eq!(catalog.random_calls.load(Ordering::SeqCst), MAX_RANDOM_COUNT);
}

#[tokio::test]
async fn random_load_leaves_search_mode() {
    let catalog = FakeCatalog::new()
        .with_search("egg", &["1", "2"])
        .with_random(six_batches());
    let explorer = Explorer::new(Arc::new(catalog), 6);

    let searched = explorer.search("egg").await;
    assert!(searched.search_mode);

    let view = explorer.clear_search().await;

    assert!(!view.search_mode);
    assert_eq!(view.query, None);
    assert_eq!(view.meal_ids(), vec!["a", "b", "c", "d", "e", "f"]);
    assert_eq!(view.status, UiStatus::Idle);
}

#[tokio::test]
async fn failed_random_load_keeps_search_mode() {
    let catalog = FakeCatalog::new()
        .with_search("egg", &["1"])
        .with_failing_random_call(0);
    let explorer = Explorer::new(Arc::new(catalog), 1);

    explorer.search("egg").await;
    let view = explorer.load_default_random().await;

    assert!(view.search_mode);
    assert!(view.meals.is_empty());
    assert!(!view.status.is_loading());
}
