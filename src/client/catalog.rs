//! The seam between the explorer and whatever serves recipes.

use async_trait::async_trait;

use crate::client::types::{MealDetail, MealSummary};
use crate::error::ExplorerError;

/// The three catalog lookups the explorer depends on.
///
/// Implementations must treat an empty or `null` result as `Ok` with an empty
/// list; only transport, status and schema failures are errors.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Meals that use the given (already normalized) ingredient.
    async fn search_by_ingredient(&self, ingredient: &str)
        -> Result<Vec<MealSummary>, ExplorerError>;

    /// One random meal. The catalog wraps it in a list, which may be empty.
    async fn random_meal(&self) -> Result<Vec<MealDetail>, ExplorerError>;

    /// Full record for `id`, or `None` if the catalog does not know it.
    async fn lookup_meal(&self, id: &str) -> Result<Option<MealDetail>, ExplorerError>;
}
