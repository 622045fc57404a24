//! Fan-out fetches against the catalog.
//!
//! Both helpers join their requests all-or-nothing: results come back in
//! request order, and the first failure fails the whole batch.

use futures_util::future::try_join_all;

use crate::client::{catalog::RecipeCatalog, types::MealSummary};
use crate::error::ExplorerError;
use crate::explorer::intersect::{has_empty_operand, intersect_by_id};

/// Largest random batch a single load may request.
pub const MAX_RANDOM_COUNT: usize = 24;

/// Fetches `count` random meals concurrently and flattens them in request order.
pub async fn fetch_random_batch(
    catalog: &dyn RecipeCatalog,
    count: usize,
) -> Result<Vec<MealSummary>, ExplorerError> {
    if count == 0 || count > MAX_RANDOM_COUNT {
        return Err(ExplorerError::Validation(format!(
            "Random batch size must be between 1 and {}",
            MAX_RANDOM_COUNT
        )));
    }

    tracing::debug!("Fetching {} random meals", count);
    let batches = try_join_all((0..count).map(|_| catalog.random_meal())).await?;

    let meals: Vec<MealSummary> = batches
        .iter()
        .flatten()
        .map(|detail| detail.summary())
        .collect();

    if meals.is_empty() {
        return Err(ExplorerError::NoResults(
            "Could not load random recipes. Please try again.".to_string(),
        ));
    }

    Ok(meals)
}

/// Searches every token concurrently and keeps only meals found for all of them.
///
/// Display order follows the first token's results.
pub async fn fetch_intersection(
    catalog: &dyn RecipeCatalog,
    tokens: &[String],
) -> Result<Vec<MealSummary>, ExplorerError> {
    if tokens.is_empty() {
        return Err(ExplorerError::Validation(
            "Please enter at least one ingredient".to_string(),
        ));
    }

    let result_sets = try_join_all(
        tokens
            .iter()
            .map(|token| catalog.search_by_ingredient(token)),
    )
    .await?;

    let no_match = || ExplorerError::NoResults(format!("No recipes found with all: {}", tokens.join(", ")));

    if has_empty_operand(&result_sets) {
        tracing::debug!("At least one ingredient matched nothing, skipping reduction");
        return Err(no_match());
    }

    let common = intersect_by_id(result_sets);
    if common.is_empty() {
        return Err(no_match());
    }

    Ok(common)
}
