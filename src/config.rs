// src/config.rs
//! Build configuration: identifier namespace, list delimiters, and the
//! diet keyword lists.
//!
//! The keyword lists are authoritative data, not heuristics: changing them
//! silently changes which diet tags get inferred. They are overridable via
//! `larder.toml` for datasets with different vocabulary, but the defaults
//! are the curated lists the tagging contract is tested against.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::error::Result;

const CONFIG_FILE: &str = "larder.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Prefix for recipe identifiers, e.g. `recipe:spaghetti-carbonara`.
    #[serde(default = "default_id_namespace")]
    pub id_namespace: String,

    /// Regex splitting free-text ingredient/direction lists into entries.
    #[serde(default = "default_list_split_pattern")]
    pub list_split_pattern: String,

    /// Separator between segments of a cuisine hierarchy path.
    #[serde(default = "default_cuisine_separator")]
    pub cuisine_separator: String,

    /// Ingredients containing any of these substrings are animal products.
    #[serde(default = "default_animal_products")]
    pub animal_products: Vec<String>,

    /// Subset of animal products that also break the vegetarian predicate.
    #[serde(default = "default_meat_products")]
    pub meat_products: Vec<String>,

    /// Ingredients containing any of these substrings carry gluten.
    #[serde(default = "default_gluten_grains")]
    pub gluten_grains: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_namespace: default_id_namespace(),
            list_split_pattern: default_list_split_pattern(),
            cuisine_separator: default_cuisine_separator(),
            animal_products: default_animal_products(),
            meat_products: default_meat_products(),
            gluten_grains: default_gluten_grains(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config, merging `larder.toml` from the working directory
    /// when present. A missing or unreadable file falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        if let Ok(content) = fs::read_to_string(Path::new(CONFIG_FILE)) {
            config.parse_toml(&content);
        }
        config
    }

    /// Replaces settings with the parsed TOML; fields absent from the
    /// content fall back to their defaults. Invalid TOML leaves the
    /// config untouched.
    pub fn parse_toml(&mut self, content: &str) {
        if let Ok(parsed) = toml::from_str::<Config>(content) {
            *self = parsed;
        }
    }

    /// Compiles the list-splitting regex.
    ///
    /// # Errors
    /// Returns error if the configured pattern is not a valid regex.
    pub fn list_splitter(&self) -> Result<Regex> {
        Ok(Regex::new(&self.list_split_pattern)?)
    }
}

fn default_id_namespace() -> String {
    "recipe:".to_string()
}

fn default_list_split_pattern() -> String {
    r"[\n;]+".to_string()
}

fn default_cuisine_separator() -> String {
    ">".to_string()
}

fn default_animal_products() -> Vec<String> {
    to_strings(&[
        "anchovy", "bacon", "beef", "butter", "chicken", "egg", "fish", "gelatin", "honey",
        "lamb", "milk", "pork", "shrimp", "turkey", "yogurt", "parmesan", "cream", "cheese",
    ])
}

fn default_meat_products() -> Vec<String> {
    to_strings(&["chicken", "beef", "pork", "lamb", "fish", "shrimp", "turkey"])
}

fn default_gluten_grains() -> Vec<String> {
    to_strings(&[
        "wheat", "barley", "rye", "spelt", "farro", "semolina", "flour", "spaghetti", "pasta",
        "bread",
    ])
}

fn to_strings(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| (*t).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_curated_lists() {
        let config = Config::new();
        assert!(config.animal_products.iter().any(|t| t == "gelatin"));
        assert!(config.gluten_grains.iter().any(|t| t == "semolina"));
        // Every meat term must also be an animal product, otherwise a
        // recipe could end up vegan but not vegetarian.
        for meat in &config.meat_products {
            assert!(
                config.animal_products.contains(meat),
                "meat term {meat} missing from animal products"
            );
        }
    }

    #[test]
    fn parse_toml_overrides_lists() {
        let mut config = Config::new();
        config.parse_toml(r#"animal_products = ["venison"]"#);
        assert_eq!(config.animal_products, vec!["venison".to_string()]);
        // Untouched fields keep their defaults.
        assert_eq!(config.id_namespace, "recipe:");
    }

    #[test]
    fn parse_toml_ignores_garbage() {
        let mut config = Config::new();
        config.parse_toml("not toml at [[[ all");
        assert_eq!(config.cuisine_separator, ">");
    }
}
