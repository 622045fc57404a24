use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::client::catalog::RecipeCatalog;
use crate::error::ExplorerError;
use crate::explorer::{
    fetch::{fetch_intersection, fetch_random_batch},
    state::{ExplorerSnapshot, ExplorerState, UiStatus},
    tokenize::tokenize_ingredients,
};

pub const RANDOM_LOADING_MESSAGE: &str = "Loading random recipes...";
pub const RANDOM_FAILED_MESSAGE: &str = "Failed to load random recipes. Please check your connection.";
pub const SEARCH_FAILED_MESSAGE: &str = "Error fetching recipes. Try again later.";
pub const DETAIL_FAILED_MESSAGE: &str = "Could not load recipe details.";

/// # Recipe Explorer
///
/// Owns the current result set, status banner, search mode and detail overlay,
/// and drives the catalog on behalf of user actions.
///
/// ## Stale completions
///
/// Loads are never cancelled. Each one takes a generation number when it starts
/// and only commits if no newer load has started since, so a slow older search
/// cannot overwrite a newer one.
///
/// The state lock is never held across a catalog request.
pub struct Explorer {
    catalog: Arc<dyn RecipeCatalog>,
    random_count: usize,
    state: Mutex<ExplorerState>,
}

impl Explorer {
    pub fn new(catalog: Arc<dyn RecipeCatalog>, random_count: usize) -> Self {
        Self {
            catalog,
            random_count,
            state: Mutex::new(ExplorerState::default()),
        }
    }

    pub fn random_count(&self) -> usize {
        self.random_count
    }

    pub async fn snapshot(&self) -> ExplorerSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Clears the grid, shows `message` and returns this load's generation.
    /// A `query` replaces the remembered search text in the same step.
    async fn begin_load(&self, message: String, query: Option<String>) -> u64 {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.meals.clear();
        state.status = UiStatus::Loading(message);
        if query.is_some() {
            state.query = query;
        }
        state.generation
    }

    /// Applies `update` if `generation` is still current. Returns the snapshot
    /// either way.
    async fn finish_load<F>(&self, generation: u64, update: F) -> ExplorerSnapshot
    where
        F: FnOnce(&mut ExplorerState),
    {
        let mut state = self.state.lock().await;
        if state.generation == generation {
            update(&mut state);
        } else {
            tracing::debug!(
                "Discarding stale load {} (current is {})",
                generation,
                state.generation
            );
        }
        state.snapshot()
    }

    /// Loads the configured number of random meals.
    pub async fn load_default_random(&self) -> ExplorerSnapshot {
        self.load_random(self.random_count).await
    }

    pub async fn load_random(&self, count: usize) -> ExplorerSnapshot {
        tracing::info!("Loading {} random recipes", count);
        let generation = self.begin_load(RANDOM_LOADING_MESSAGE.to_string(), None).await;

        match fetch_random_batch(self.catalog.as_ref(), count).await {
            Ok(meals) => {
                tracing::info!("Loaded {} random recipes", meals.len());
                self.finish_load(generation, |state| {
                    state.meals = meals;
                    state.status = UiStatus::Idle;
                    state.search_mode = false;
                    state.loaded_at = Some(Utc::now());
                })
                .await
            }
            Err(e) => {
                let message = match &e {
                    ExplorerError::Validation(msg) | ExplorerError::NoResults(msg) => msg.clone(),
                    _ => RANDOM_FAILED_MESSAGE.to_string(),
                };
                tracing::warn!("Random load failed: {}", e);
                self.finish_load(generation, |state| {
                    state.status = UiStatus::Error(message);
                })
                .await
            }
        }
    }

    /// Runs an ingredient intersection search for the whitespace-separated
    /// ingredients in `input`.
    pub async fn search(&self, input: &str) -> ExplorerSnapshot {
        let tokens = tokenize_ingredients(input);
        if tokens.is_empty() {
            tracing::debug!("Rejecting empty ingredient search");
            let mut state = self.state.lock().await;
            state.status = UiStatus::Error("Please enter at least one ingredient".to_string());
            return state.snapshot();
        }

        tracing::info!("Searching recipes with ingredients: {:?}", tokens);
        let generation = self
            .begin_load(
                format!("Searching recipes with {}...", tokens.join(", ")),
                Some(input.trim().to_string()),
            )
            .await;

        match fetch_intersection(self.catalog.as_ref(), &tokens).await {
            Ok(meals) => {
                tracing::info!("Found {} recipes with all ingredients", meals.len());
                self.finish_load(generation, |state| {
                    state.meals = meals;
                    state.status = UiStatus::Idle;
                    state.search_mode = true;
                    state.loaded_at = Some(Utc::now());
                })
                .await
            }
            Err(e) => {
                let message = match &e {
                    ExplorerError::Validation(msg) | ExplorerError::NoResults(msg) => msg.clone(),
                    _ => SEARCH_FAILED_MESSAGE.to_string(),
                };
                if e.is_fetch_failure() {
                    tracing::error!("Ingredient search failed: {}", e);
                } else {
                    tracing::info!("{}", e);
                }
                self.finish_load(generation, |state| {
                    state.status = UiStatus::Error(message);
                })
                .await
            }
        }
    }

    /// Fetches the full record for `id` and opens it in the overlay.
    ///
    /// Every call hits the catalog; nothing is cached.
    pub async fn show_details(&self, id: &str) -> ExplorerSnapshot {
        tracing::info!("Loading recipe details for {}", id);
        let generation = {
            let mut state = self.state.lock().await;
            state.detail_generation += 1;
            state.detail_generation
        };

        let result = match self.catalog.lookup_meal(id).await {
            Ok(Some(detail)) => Ok(detail),
            Ok(None) => Err(ExplorerError::NoResults(format!("No recipe with id {}", id))),
            Err(e) => Err(e),
        };

        let mut state = self.state.lock().await;
        if state.detail_generation != generation {
            tracing::debug!("Discarding stale detail fetch for {}", id);
            return state.snapshot();
        }

        match result {
            Ok(detail) => state.overlay = Some(detail),
            Err(e) => {
                tracing::warn!("Failed to load recipe {}: {}", id, e);
                state.status = UiStatus::Error(DETAIL_FAILED_MESSAGE.to_string());
            }
        }
        state.snapshot()
    }

    /// Closes the detail overlay.
    pub async fn close_details(&self) -> ExplorerSnapshot {
        let mut state = self.state.lock().await;
        // An in-flight detail fetch must not reopen what the user just closed
        state.detail_generation += 1;
        state.overlay = None;
        state.snapshot()
    }

    /// Forgets the current search and goes back to random recipes.
    pub async fn clear_search(&self) -> ExplorerSnapshot {
        tracing::info!("Clearing search");
        self.state.lock().await.query = None;
        self.load_default_random().await
    }
}
