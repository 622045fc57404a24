//! # Recipe Explorer
//!
//! The controller behind the explorer UI. It turns user actions into catalog
//! requests and keeps the one piece of shared state: the current result set
//! plus its status banner, search mode flag and detail overlay.
//!
//! ## Modules
//!
//! - [`tokenize`] - Free text to ingredient tokens
//! - [`intersect`] - Id-based intersection of per-ingredient results
//! - [`fetch`] - Concurrent, all-or-nothing catalog fan-out
//! - [`state`] - Status and snapshot types
//! - [`explorer`] - The [`Explorer`] controller
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use mealdb_explorer::{Explorer, MealDbClient};
//!
//! # async fn example() {
//! let client = MealDbClient::new(
//!     "https://www.themealdb.com".to_string(),
//!     "1".to_string(),
//!     Duration::from_secs(10),
//! );
//! let explorer = Explorer::new(Arc::new(client), 6);
//!
//! let view = explorer.search("chicken rice").await;
//! println!("{} recipes use both", view.meals.len());
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod explorer;
pub mod fetch;
pub mod intersect;
pub mod state;
pub mod tokenize;

pub use explorer::Explorer;
pub use state::{ExplorerSnapshot, UiStatus};
pub use tokenize::tokenize_ingredients;
