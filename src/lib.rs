//! # MealDB Recipe Explorer
//!
//! Discover recipes by ingredient or at random from TheMealDB. The crate is
//! organized in three layers:
//!
//! ## Client Module
//!
//! The [`client`] module talks to TheMealDB over HTTP: ingredient search,
//! random meal, and lookup by id, behind the [`RecipeCatalog`] trait.
//!
//! ## Explorer Module
//!
//! The [`explorer`] module holds the result grid, status banner and detail
//! overlay, and implements multi-ingredient search by intersecting one
//! concurrent lookup per ingredient.
//!
//! ## Server Module
//!
//! The [`server`] module exposes explorer actions as MCP tools, rendering
//! each resulting view with [`render`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealdb_explorer::{config::Config, RecipeExplorerServer};
//!
//! let server = RecipeExplorerServer::from_config(&Config::default());
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod explorer;
pub mod render;
pub mod server;

pub use client::{MealDbClient, RecipeCatalog};
pub use error::ExplorerError;
pub use explorer::Explorer;
pub use server::RecipeExplorerServer;
