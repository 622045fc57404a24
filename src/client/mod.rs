//! # TheMealDB HTTP Client
//!
//! This module provides the catalog side of the explorer: a [`RecipeCatalog`]
//! trait describing the three lookups the explorer needs, and [`MealDbClient`],
//! its HTTP implementation against TheMealDB.
//!
//! ## Modules
//!
//! - [`catalog`] - The `RecipeCatalog` trait
//! - [`client`] - HTTP implementation of the catalog
//! - [`types`] - Response envelope, summary and detail types
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use mealdb_explorer::client::{MealDbClient, RecipeCatalog};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = MealDbClient::new(
//!     "https://www.themealdb.com".to_string(),
//!     "1".to_string(),
//!     Duration::from_secs(10),
//! );
//!
//! let meals = client.search_by_ingredient("chicken").await?;
//! println!("Found {} meals", meals.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use catalog::RecipeCatalog;
pub use client::MealDbClient;
pub use types::*;
