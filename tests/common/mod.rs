#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use mealdb_explorer::client::{IngredientLine, MealDetail, MealSummary, RecipeCatalog};
use mealdb_explorer::ExplorerError;

pub fn meal(id: &str) -> MealSummary {
    MealSummary {
        id: id.to_string(),
        name: format!("Meal {}", id),
        thumbnail: Some(format!("https://example.com/{}.jpg", id)),
    }
}

pub fn meals(ids: &[&str]) -> Vec<MealSummary> {
    ids.iter().map(|id| meal(id)).collect()
}

pub fn detail(id: &str) -> MealDetail {
    MealDetail {
        id: id.to_string(),
        name: format!("Meal {}", id),
        image: Some(format!("https://example.com/{}.jpg", id)),
        instructions: Some("Cook it.".to_string()),
        ingredients: vec![IngredientLine {
            ingredient: "Salt".to_string(),
            measure: Some("1 tsp".to_string()),
        }],
        video: None,
    }
}

/// Held search: `started` fires when the request arrives, `release` lets it finish.
#[derive(Clone)]
pub struct Gate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl Gate {
    pub fn new() -> Self {
        Self {
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

/// In-memory catalog with scripted answers and call counters.
#[derive(Default)]
pub struct FakeCatalog {
    searches: HashMap<String, Vec<MealSummary>>,
    failing_searches: HashSet<String>,
    gates: HashMap<String, Gate>,
    random_meals: Vec<Vec<MealDetail>>,
    failing_random_call: Option<usize>,
    random_reverse_latency: bool,
    details: HashMap<String, MealDetail>,
    failing_lookup: bool,
    pub search_calls: AtomicUsize,
    pub random_calls: AtomicUsize,
    pub lookup_calls: AtomicUsize,
    pub searched: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, token: &str, ids: &[&str]) -> Self {
        self.searches.insert(token.to_string(), meals(ids));
        self
    }

    pub fn with_failing_search(mut self, token: &str) -> Self {
        self.failing_searches.insert(token.to_string());
        self
    }

    pub fn with_gate(mut self, token: &str, gate: Gate) -> Self {
        self.gates.insert(token.to_string(), gate);
        self
    }

    /// Call `i` answers with `batches[i]`; calls past the end get an empty list.
    pub fn with_random(mut self, batches: Vec<Vec<MealDetail>>) -> Self {
        self.random_meals = batches;
        self
    }

    pub fn with_failing_random_call(mut self, call: usize) -> Self {
        self.failing_random_call = Some(call);
        self
    }

    /// Later random calls finish first.
    pub fn with_reverse_random_latency(mut self) -> Self {
        self.random_reverse_latency = true;
        self
    }

    pub fn with_detail(mut self, detail: MealDetail) -> Self {
        self.details.insert(detail.id.clone(), detail);
        self
    }

    pub fn with_failing_lookup(mut self) -> Self {
        self.failing_lookup = true;
        self
    }

    pub fn total_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
            + self.random_calls.load(Ordering::SeqCst)
            + self.lookup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeCatalog for FakeCatalog {
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>, ExplorerError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.searched.lock().unwrap().push(ingredient.to_string());

        if let Some(gate) = self.gates.get(ingredient) {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        if self.failing_searches.contains(ingredient) {
            return Err(ExplorerError::Status(503));
        }
        Ok(self.searches.get(ingredient).cloned().unwrap_or_default())
    }

    async fn random_meal(&self) -> Result<Vec<MealDetail>, ExplorerError> {
        let call = self.random_calls.fetch_add(1, Ordering::SeqCst);

        if self.random_reverse_latency {
            let remaining = self.random_meals.len().saturating_sub(call) as u64;
            tokio::time::sleep(Duration::from_millis(5 * remaining)).await;
        }

        if self.failing_random_call == Some(call) {
            return Err(ExplorerError::Parse("expected value at line 1 column 1".to_string()));
        }
        Ok(self.random_meals.get(call).cloned().unwrap_or_default())
    }

    async fn lookup_meal(&self, id: &str) -> Result<Option<MealDetail>, ExplorerError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_lookup {
            return Err(ExplorerError::Status(500));
        }
        Ok(self.details.get(id).cloned())
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
