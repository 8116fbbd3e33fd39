// src/cli/handlers.rs
//! Command handlers: the console stand-in for the serving boundary.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::diet::DietTag;
use crate::graph::{self, RecipeGraph, SearchFilters};
use crate::record;

use super::LarderExit;

pub fn handle_build(input: &Path, output: &Path) -> Result<LarderExit> {
    let config = Config::load();
    let outcome = record::load_records(input)
        .with_context(|| format!("failed to load recipe source {}", input.display()))?;

    let (built, report) = graph::build(&outcome.records, &config)?;
    graph::store::save(&built, output)
        .with_context(|| format!("failed to write graph to {}", output.display()))?;

    println!(
        "{} {} recipes, {} ingredients, {} cuisines -> {}",
        "built:".green().bold(),
        report.recipes,
        report.ingredients,
        report.cuisines,
        output.display()
    );
    let skipped = report.skipped + outcome.malformed;
    if skipped > 0 {
        println!(
            "{} {skipped} records skipped (missing name/ingredients or unreadable)",
            "warning:".yellow().bold()
        );
    }
    Ok(LarderExit::Success)
}

pub fn handle_search(
    graph_path: &Path,
    ingredient: Option<String>,
    cuisine: Option<String>,
    diet: Option<String>,
    max_time: Option<String>,
    json: bool,
) -> Result<LarderExit> {
    let built = load_graph(graph_path)?;

    // Malformed filter input degrades to "filter absent"; search is total.
    let filters = SearchFilters {
        ingredient: ingredient.filter(|i| !i.trim().is_empty()),
        cuisine: cuisine.filter(|c| !c.trim().is_empty()),
        diet: diet.as_deref().and_then(DietTag::parse),
        max_time: max_time.as_deref().and_then(record::parse_u32),
    };

    let results = built.search(&filters);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(LarderExit::Success);
    }

    if results.is_empty() {
        println!("{}", "no recipes matched".dimmed());
        return Ok(LarderExit::Success);
    }
    for summary in &results {
        let rating = summary
            .rating
            .map_or_else(|| "  -".to_string(), |r| format!("{r:.1}"));
        let time = summary
            .total_time
            .map_or_else(|| "-".to_string(), |t| format!("{t} min"));
        println!(
            "{} {:>4}  {:>8}  {}  {}",
            summary.id.cyan(),
            rating,
            time,
            summary.label.bold(),
            summary.diets.join(", ").dimmed()
        );
    }
    println!("{} {} recipes", "found:".green().bold(), results.len());
    Ok(LarderExit::Success)
}

pub fn handle_show(graph_path: &Path, id: &str, json: bool) -> Result<LarderExit> {
    let built = load_graph(graph_path)?;

    let Some(detail) = built.detail(id) else {
        println!("{} no recipe with id {id}", "not found:".red().bold());
        return Ok(LarderExit::NotFound);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(LarderExit::Success);
    }

    println!("{}  ({})", detail.label.bold(), detail.id.cyan());
    if let Some(rating) = detail.rating {
        println!("  rating: {rating:.1}");
    }
    print_time("total", detail.total_time);
    print_time("prep", detail.prep_time);
    print_time("cook", detail.cook_time);
    if let Some(servings) = detail.servings {
        println!("  servings: {servings}");
    }
    if let Some(url) = &detail.url {
        println!("  url: {url}");
    }
    if !detail.cuisines.is_empty() {
        println!("  cuisines: {}", detail.cuisines.join(", "));
    }
    if !detail.diets.is_empty() {
        println!("  diets: {}", detail.diets.join(", ").green());
    }
    println!("  ingredients:");
    for ingredient in &detail.ingredients {
        println!("    - {ingredient}");
    }
    if !detail.directions.is_empty() {
        println!("  directions:");
        for (step, direction) in detail.directions.iter().enumerate() {
            println!("    {}. {direction}", step + 1);
        }
    }
    Ok(LarderExit::Success)
}

pub fn handle_cuisines(graph_path: &Path) -> Result<LarderExit> {
    let built = load_graph(graph_path)?;
    for label in built.list_cuisines() {
        println!("{label}");
    }
    Ok(LarderExit::Success)
}

pub fn handle_diets() -> Result<LarderExit> {
    // Fixed list; no graph needed.
    for label in graph::list_diets() {
        println!("{label}");
    }
    Ok(LarderExit::Success)
}

pub fn handle_stats(graph_path: &Path) -> Result<LarderExit> {
    let built = load_graph(graph_path)?;
    println!("recipes:     {}", built.recipe_count());
    println!("ingredients: {}", built.ingredient_count());
    println!("cuisines:    {}", built.cuisine_count());
    Ok(LarderExit::Success)
}

fn load_graph(path: &Path) -> Result<RecipeGraph> {
    graph::store::load(path)
        .with_context(|| format!("run `larder build` first to create {}", path.display()))
}

fn print_time(kind: &str, minutes: Option<u32>) {
    if let Some(minutes) = minutes {
        println!("  {kind} time: {minutes} min");
    }
}
