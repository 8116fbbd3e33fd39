// tests/integration_cli.rs
//! Exit-code and filter-leniency tests for the command handlers.

use std::fs;
use std::path::PathBuf;

use larder_core::cli::{handlers, LarderExit};
use larder_core::config::Config;
use larder_core::graph::{self, SearchFilters};
use larder_core::record::{self, ListField, RawRecord};
use tempfile::TempDir;

fn row(name: &str, ingredients: &str) -> RawRecord {
    RawRecord {
        name: name.to_string(),
        ingredients: ListField::Text(ingredients.to_string()),
        ..RawRecord::default()
    }
}

fn built_graph(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("graph.json");
    let mut salad = row("Lentil Salad", "red lentils; olive oil");
    salad.rating = Some(4.5);
    salad.total_time = Some(20);
    let toast = row("Delta Toast", "bread; butter");
    let (built, _) = graph::build(&[salad, toast], &Config::new()).unwrap();
    graph::store::save(&built, &path).unwrap();
    path
}

#[test]
fn show_unknown_id_is_not_found_not_a_crash() {
    let dir = TempDir::new().unwrap();
    let path = built_graph(&dir);
    let exit = handlers::handle_show(&path, "recipe:absent", false).unwrap();
    assert_eq!(exit, LarderExit::NotFound);
    assert_eq!(exit.code(), 1);
}

#[test]
fn show_known_id_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = built_graph(&dir);
    for json in [false, true] {
        let exit = handlers::handle_show(&path, "recipe:lentil-salad", json).unwrap();
        assert_eq!(exit, LarderExit::Success);
        assert_eq!(exit.code(), 0);
    }
}

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(LarderExit::Success.code(), LarderExit::NotFound.code());
}

#[test]
fn search_tolerates_malformed_filter_values() {
    let dir = TempDir::new().unwrap();
    let path = built_graph(&dir);
    // Non-numeric max-time and an unknown diet word degrade to
    // filter-absent; the search still succeeds.
    let exit = handlers::handle_search(
        &path,
        None,
        None,
        Some("keto".to_string()),
        Some("about an hour".to_string()),
        true,
    )
    .unwrap();
    assert_eq!(exit, LarderExit::Success);
}

#[test]
fn malformed_max_time_matches_unfiltered_results() {
    let dir = TempDir::new().unwrap();
    let path = built_graph(&dir);
    let built = graph::store::load(&path).unwrap();

    // The handlers run user input through the same lenient parser.
    let lenient = SearchFilters {
        max_time: record::parse_u32("about an hour"),
        ..SearchFilters::default()
    };
    let unfiltered: Vec<String> = built
        .search(&SearchFilters::default())
        .iter()
        .map(|s| s.id.clone())
        .collect();
    let tolerated: Vec<String> = built.search(&lenient).iter().map(|s| s.id.clone()).collect();
    assert_eq!(tolerated, unfiltered);
    assert_eq!(tolerated.len(), 2);
}

#[test]
fn build_from_missing_source_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nowhere.csv");
    let output = dir.path().join("graph.json");
    assert!(handlers::handle_build(&missing, &output).is_err());
    assert!(!output.exists());
}

#[test]
fn build_then_show_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("recipes.csv");
    let output = dir.path().join("graph.json");
    fs::write(
        &source,
        "recipe_name,ingredients,total_time,rating\n\
         Fruit Bowl,apples; oranges,5,4.0\n",
    )
    .unwrap();

    let exit = handlers::handle_build(&source, &output).unwrap();
    assert_eq!(exit, LarderExit::Success);

    let exit = handlers::handle_show(&output, "recipe:fruit-bowl", true).unwrap();
    assert_eq!(exit, LarderExit::Success);
    let exit = handlers::handle_cuisines(&output).unwrap();
    assert_eq!(exit, LarderExit::Success);
    let exit = handlers::handle_stats(&output).unwrap();
    assert_eq!(exit, LarderExit::Success);
    let exit = handlers::handle_diets().unwrap();
    assert_eq!(exit, LarderExit::Success);
}
