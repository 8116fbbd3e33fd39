// src/graph/builder.rs
//! Graph construction: raw rows in, linked entity graph out.

use std::collections::{BTreeSet, HashMap};

use crate::config::Config;
use crate::diet::{self, IngredientFlags};
use crate::error::Result;
use crate::graph::model::{canonical_id, slugify, Cuisine, Ingredient, Recipe, RecipeGraph};
use crate::record::RawRecord;

/// Counts reported back to whoever triggered the build. A skipped record
/// is one missing its name or its entire ingredient list; skips are
/// warnings, not failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub recipes: usize,
    pub ingredients: usize,
    pub cuisines: usize,
    pub skipped: usize,
}

/// Builds the entity graph from raw rows.
///
/// # Errors
/// Returns error if the configured list-split pattern is not a valid regex.
pub fn build(records: &[RawRecord], config: &Config) -> Result<(RecipeGraph, BuildReport)> {
    let splitter = config.list_splitter()?;
    let mut graph = RecipeGraph::default();
    let mut report = BuildReport::default();
    // Tracks how many recipes claimed each slug, for id disambiguation.
    let mut slug_uses: HashMap<String, usize> = HashMap::new();

    for record in records {
        let ingredient_names = record.ingredients.entries(&splitter);
        if record.name.trim().is_empty() || ingredient_names.is_empty() {
            report.skipped += 1;
            continue;
        }

        let mut ingredient_ids = Vec::with_capacity(ingredient_names.len());
        let mut flags = Vec::with_capacity(ingredient_names.len());
        for name in &ingredient_names {
            let (id, ingredient_flags) = intern_ingredient(&mut graph, name, config);
            flags.push(ingredient_flags);
            ingredient_ids.push(id);
        }

        let cuisines = intern_cuisines(&mut graph, record.cuisine_path.as_deref(), config);
        let diets = diet::infer_tags(flags);
        let id = assign_recipe_id(record.name.trim(), config, &mut slug_uses);

        graph.recipes.insert(
            id.clone(),
            Recipe {
                id,
                label: record.name.trim().to_string(),
                total_time: record.total_time,
                prep_time: record.prep_time,
                cook_time: record.cook_time,
                servings: record.servings,
                rating: record.rating,
                url: record.url.clone(),
                ingredients: ingredient_ids,
                directions: record.directions.entries(&splitter),
                cuisines,
                diets,
            },
        );
    }

    graph.rebuild_indexes();
    report.recipes = graph.recipe_count();
    report.ingredients = graph.ingredient_count();
    report.cuisines = graph.cuisine_count();
    Ok((graph, report))
}

/// Creates or reuses the ingredient node for a parsed name and returns its
/// id. Classification happens only on first creation; later mentions of
/// the same canonical name reuse the stored flags.
fn intern_ingredient(
    graph: &mut RecipeGraph,
    name: &str,
    config: &Config,
) -> (String, IngredientFlags) {
    let id = canonical_id(name);
    let node = graph.ingredients.entry(id.clone()).or_insert_with(|| Ingredient {
        id: id.clone(),
        label: name.to_string(),
        flags: diet::classify(name, config),
    });
    (id, node.flags)
}

/// Splits a cuisine hierarchy path into segments and interns each as a
/// cuisine node. The recipe links to every segment, so filtering by a
/// parent category ("World Cuisine") matches recipes filed beneath it.
fn intern_cuisines(
    graph: &mut RecipeGraph,
    cuisine_path: Option<&str>,
    config: &Config,
) -> BTreeSet<String> {
    let mut linked = BTreeSet::new();
    let Some(path) = cuisine_path else {
        return linked;
    };
    for segment in path.split(config.cuisine_separator.as_str()) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let id = canonical_id(segment);
        graph.cuisines.entry(id.clone()).or_insert_with(|| Cuisine {
            id: id.clone(),
            label: segment.to_string(),
        });
        linked.insert(id);
    }
    linked
}

/// Namespace-prefixed slug, with a counter suffix when two recipes share
/// a name, so every recipe id is unique across the graph.
fn assign_recipe_id(
    name: &str,
    config: &Config,
    slug_uses: &mut HashMap<String, usize>,
) -> String {
    let mut slug = slugify(name);
    if slug.is_empty() {
        slug = "unnamed".to_string();
    }
    let uses = slug_uses.entry(slug.clone()).or_insert(0);
    *uses += 1;
    if *uses == 1 {
        format!("{}{slug}", config.id_namespace)
    } else {
        format!("{}{slug}-{uses}", config.id_namespace)
    }
}
