// src/graph/model.rs
//! Entity types and the immutable recipe graph.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::diet::{DietTag, IngredientFlags};
use crate::graph::queries::{self, RecipeDetail, RecipeSummary, SearchFilters};

/// One recipe node. Ingredient references keep parse order; cuisine and
/// diet references are sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub directions: Vec<String>,
    #[serde(default)]
    pub cuisines: BTreeSet<String>,
    #[serde(default)]
    pub diets: BTreeSet<DietTag>,
}

/// One ingredient node. The id is the canonicalized label; the label is
/// the first-seen original text. Flags are fixed at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub flags: IngredientFlags,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cuisine {
    pub id: String,
    pub label: String,
}

/// The built entity graph: recipes, ingredients, cuisines, and the
/// precomputed membership indexes used by search. Immutable after
/// construction; a refresh builds a new graph and swaps it in whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeGraph {
    /// Keyed by recipe id; BTreeMap so iteration is id-ascending, which
    /// is the deterministic tie-break order for search results.
    pub(crate) recipes: BTreeMap<String, Recipe>,
    pub(crate) ingredients: HashMap<String, Ingredient>,
    pub(crate) cuisines: HashMap<String, Cuisine>,

    // Indexes are derived state; rebuilt after deserialization rather
    // than persisted.
    #[serde(skip)]
    pub(crate) by_cuisine: HashMap<String, HashSet<String>>,
    #[serde(skip)]
    pub(crate) by_diet: HashMap<DietTag, HashSet<String>>,
    #[serde(skip)]
    pub(crate) by_ingredient: HashMap<String, HashSet<String>>,
}

impl RecipeGraph {
    /// Recomputes the membership indexes from the entity tables. Called by
    /// the builder after population and by the store after reload.
    pub(crate) fn rebuild_indexes(&mut self) {
        self.by_cuisine.clear();
        self.by_diet.clear();
        self.by_ingredient.clear();
        for (id, recipe) in &self.recipes {
            for cuisine in &recipe.cuisines {
                self.by_cuisine
                    .entry(cuisine.clone())
                    .or_default()
                    .insert(id.clone());
            }
            for diet in &recipe.diets {
                self.by_diet.entry(*diet).or_default().insert(id.clone());
            }
            for ingredient in &recipe.ingredients {
                self.by_ingredient
                    .entry(ingredient.clone())
                    .or_default()
                    .insert(id.clone());
            }
        }
    }

    /// Filtered search returning summaries ordered by rating descending
    /// (missing ratings last), ties broken by id ascending.
    #[must_use]
    pub fn search(&self, filters: &SearchFilters) -> Vec<RecipeSummary> {
        queries::search(self, filters)
    }

    /// Full detail for one recipe, or `None` when the id is unknown.
    #[must_use]
    pub fn detail(&self, id: &str) -> Option<RecipeDetail> {
        queries::detail(self, id)
    }

    /// Distinct cuisine labels present in the graph, sorted.
    #[must_use]
    pub fn list_cuisines(&self) -> Vec<String> {
        queries::list_cuisines(self)
    }

    /// The fixed diet-tag labels, independent of graph content.
    #[must_use]
    pub fn list_diets(&self) -> Vec<String> {
        queries::list_diets()
    }

    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    #[must_use]
    pub fn cuisine_count(&self) -> usize {
        self.cuisines.len()
    }
}

/// Canonical entity id for an ingredient or cuisine label: lowercased,
/// with internal whitespace collapsed, so textual variants of the same
/// name share one node.
#[must_use]
pub fn canonical_id(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// URL-safe slug for recipe identifiers: lowercase alphanumeric runs
/// joined by single hyphens.
#[must_use]
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_hyphen = false;
    for c in label.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
