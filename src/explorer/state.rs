//! Explorer state and the read-only snapshot handed to renderers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::types::{MealDetail, MealSummary};

/// Status banner. Exactly one variant is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum UiStatus {
    #[default]
    Idle,
    Loading(String),
    Error(String),
}

impl UiStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiStatus::Loading(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            UiStatus::Idle => None,
            UiStatus::Loading(msg) | UiStatus::Error(msg) => Some(msg),
        }
    }
}

/// Everything the explorer remembers between user actions.
///
/// Only [`crate::explorer::Explorer`] mutates this, and only at the start of a
/// load, on success, and on failure.
#[derive(Debug, Default)]
pub(crate) struct ExplorerState {
    pub meals: Vec<MealSummary>,
    pub status: UiStatus,
    /// Set when the grid holds ingredient search results
    pub search_mode: bool,
    /// Last submitted search text
    pub query: Option<String>,
    pub overlay: Option<MealDetail>,
    pub loaded_at: Option<DateTime<Utc>>,
    /// Bumped by every load; a completion only commits if it still matches
    pub generation: u64,
    /// Same guard for detail fetches
    pub detail_generation: u64,
}

impl ExplorerState {
    pub fn snapshot(&self) -> ExplorerSnapshot {
        ExplorerSnapshot {
            meals: self.meals.clone(),
            status: self.status.clone(),
            search_mode: self.search_mode,
            query: self.query.clone(),
            overlay: self.overlay.clone(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Immutable copy of the explorer state for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ExplorerSnapshot {
    pub meals: Vec<MealSummary>,
    pub status: UiStatus,
    pub search_mode: bool,
    pub query: Option<String>,
    pub overlay: Option<MealDetail>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl ExplorerSnapshot {
    pub fn meal_ids(&self) -> Vec<&str> {
        self.meals.iter().map(|m| m.id.as_str()).collect()
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay.is_some()
    }
}
