// src/graph/queries.rs
//! Read-only query operations over a built graph.
//!
//! Search never fails: any filter combination yields a (possibly empty)
//! result list. The single not-found outcome in the whole query surface
//! is `detail` on an unknown id, reported as `None`.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::diet::DietTag;
use crate::graph::model::{canonical_id, Recipe, RecipeGraph};

/// Search filters. `None` means "filter absent", which always passes.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Case-insensitive substring matched against ingredient labels.
    pub ingredient: Option<String>,
    /// Case-insensitive cuisine label.
    pub cuisine: Option<String>,
    pub diet: Option<DietTag>,
    /// Upper bound on total time; recipes without a total time are
    /// excluded whenever this is set.
    pub max_time: Option<u32>,
}

/// List-view projection of a recipe. Ingredients and directions stay out
/// of the list payload.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub label: String,
    pub total_time: Option<u32>,
    pub rating: Option<f32>,
    pub cuisines: Vec<String>,
    pub diets: Vec<String>,
}

/// Full projection of a recipe for the detail view.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub label: String,
    pub total_time: Option<u32>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub rating: Option<f32>,
    pub url: Option<String>,
    pub cuisines: Vec<String>,
    pub diets: Vec<String>,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
}

pub(crate) fn search(graph: &RecipeGraph, filters: &SearchFilters) -> Vec<RecipeSummary> {
    let candidates = index_candidates(graph, filters);

    let mut results: Vec<RecipeSummary> = graph
        .recipes
        .values()
        .filter(|recipe| match &candidates {
            Some(ids) => ids.contains(&recipe.id),
            None => true,
        })
        .filter(|recipe| match filters.max_time {
            Some(limit) => recipe.total_time.is_some_and(|t| t <= limit),
            None => true,
        })
        .map(|recipe| summarize(graph, recipe))
        .collect();

    // Stable sort over id-ascending input, so equal ratings keep id order.
    results.sort_by(|a, b| match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    results
}

/// Narrows the candidate set using the precomputed indexes. `None` means
/// "no index-backed filter active"; `Some(empty)` means a filter matched
/// nothing and the search result is empty.
fn index_candidates(graph: &RecipeGraph, filters: &SearchFilters) -> Option<HashSet<String>> {
    let mut candidates: Option<HashSet<String>> = None;

    if let Some(diet) = filters.diet {
        let ids = graph.by_diet.get(&diet).cloned().unwrap_or_default();
        candidates = Some(restrict(candidates, ids));
    }

    if let Some(cuisine) = &filters.cuisine {
        let ids = graph
            .by_cuisine
            .get(&canonical_id(cuisine))
            .cloned()
            .unwrap_or_default();
        candidates = Some(restrict(candidates, ids));
    }

    if let Some(needle) = &filters.ingredient {
        let needle = needle.to_lowercase();
        let mut ids = HashSet::new();
        for ingredient in graph.ingredients.values() {
            if ingredient.label.to_lowercase().contains(&needle) {
                if let Some(users) = graph.by_ingredient.get(&ingredient.id) {
                    ids.extend(users.iter().cloned());
                }
            }
        }
        candidates = Some(restrict(candidates, ids));
    }

    candidates
}

fn restrict(current: Option<HashSet<String>>, allowed: HashSet<String>) -> HashSet<String> {
    match current {
        None => allowed,
        Some(current) => current.intersection(&allowed).cloned().collect(),
    }
}

pub(crate) fn detail(graph: &RecipeGraph, id: &str) -> Option<RecipeDetail> {
    let recipe = graph.recipes.get(id)?;
    Some(RecipeDetail {
        id: recipe.id.clone(),
        label: recipe.label.clone(),
        total_time: recipe.total_time,
        prep_time: recipe.prep_time,
        cook_time: recipe.cook_time,
        servings: recipe.servings,
        rating: recipe.rating,
        url: recipe.url.clone(),
        cuisines: cuisine_labels(graph, recipe),
        diets: diet_labels(recipe),
        ingredients: recipe
            .ingredients
            .iter()
            .filter_map(|id| graph.ingredients.get(id))
            .map(|i| i.label.clone())
            .collect(),
        directions: recipe.directions.clone(),
    })
}

pub(crate) fn list_cuisines(graph: &RecipeGraph) -> Vec<String> {
    let mut labels: Vec<String> = graph.cuisines.values().map(|c| c.label.clone()).collect();
    labels.sort_by_key(|l| l.to_lowercase());
    labels
}

/// The fixed diet filter labels. Data-independent: consumers populate
/// filter choices from this list whether or not any recipe carries a tag.
#[must_use]
pub fn list_diets() -> Vec<String> {
    DietTag::ALL.iter().map(|t| t.label().to_string()).collect()
}

fn summarize(graph: &RecipeGraph, recipe: &Recipe) -> RecipeSummary {
    RecipeSummary {
        id: recipe.id.clone(),
        label: recipe.label.clone(),
        total_time: recipe.total_time,
        rating: recipe.rating,
        cuisines: cuisine_labels(graph, recipe),
        diets: diet_labels(recipe),
    }
}

fn cuisine_labels(graph: &RecipeGraph, recipe: &Recipe) -> Vec<String> {
    recipe
        .cuisines
        .iter()
        .filter_map(|id| graph.cuisines.get(id))
        .map(|c| c.label.clone())
        .collect()
}

fn diet_labels(recipe: &Recipe) -> Vec<String> {
    recipe.diets.iter().map(|d| d.label().to_string()).collect()
}
