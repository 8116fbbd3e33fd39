// src/graph/mod.rs
//! The recipe entity graph: construction, queries, and persistence.

pub mod builder;
pub mod model;
pub mod queries;
pub mod store;

pub use builder::{build, BuildReport};
pub use model::{canonical_id, slugify, Cuisine, Ingredient, Recipe, RecipeGraph};
pub use queries::{list_diets, RecipeDetail, RecipeSummary, SearchFilters};
pub use store::SharedGraph;
