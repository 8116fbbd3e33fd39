// src/record.rs
//! Raw source rows and the dataset loader.
//!
//! The loader is deliberately lenient about field shape: malformed numeric
//! cells become `None`, list cells accept either a JSON array or delimited
//! free text, and a row that cannot be read at all is counted as malformed
//! rather than aborting the load. Only an unreadable (or unsupported)
//! source file is fatal.

use std::path::Path;

use regex::Regex;
use serde_json::Value;

use crate::error::{LarderError, Result};

/// One tabular recipe row as it appears in the source dataset.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub name: String,
    pub ingredients: ListField,
    pub directions: ListField,
    pub cuisine_path: Option<String>,
    pub total_time: Option<u32>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub rating: Option<f32>,
    pub url: Option<String>,
}

/// A list-valued field: either already a list (JSON sources) or free text
/// that still needs splitting (CSV cells).
#[derive(Debug, Clone)]
pub enum ListField {
    Items(Vec<String>),
    Text(String),
}

impl Default for ListField {
    fn default() -> Self {
        ListField::Text(String::new())
    }
}

impl ListField {
    /// Resolves the field into trimmed, non-empty entries. Text fields are
    /// parsed as a JSON string array first (CSV exports often embed one),
    /// then split on the configured delimiter pattern.
    #[must_use]
    pub fn entries(&self, splitter: &Regex) -> Vec<String> {
        match self {
            ListField::Items(items) => clean(items.iter().map(String::as_str)),
            ListField::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Vec::new();
                }
                if trimmed.starts_with('[') {
                    if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
                        return clean(items.iter().map(String::as_str));
                    }
                }
                clean(splitter.split(trimmed))
            }
        }
    }
}

fn clean<'a, I: Iterator<Item = &'a str>>(parts: I) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Result of loading a source file: the usable rows plus a count of rows
/// that could not be read at all.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<RawRecord>,
    pub malformed: usize,
}

/// Loads raw rows from a CSV or JSON dataset.
///
/// # Errors
/// Returns error if the file is missing, unreadable, or neither `.csv`
/// nor `.json`.
pub fn load_records(path: &Path) -> Result<LoadOutcome> {
    if !path.exists() {
        return Err(LarderError::SourceMissing(path.to_path_buf()));
    }
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match extension.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LarderError::UnsupportedFormat(other.to_string())),
    }
}

fn load_csv(path: &Path) -> Result<LoadOutcome> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    let name_col = column("recipe_name").or_else(|| column("name"));
    let ingredients_col = column("ingredients");
    let directions_col = column("directions");
    let cuisine_col = column("cuisine_path").or_else(|| column("cuisine"));
    let total_col = column("total_time");
    let prep_col = column("prep_time");
    let cook_col = column("cook_time");
    let servings_col = column("servings");
    let rating_col = column("rating");
    let url_col = column("url");

    let mut outcome = LoadOutcome::default();
    for row in reader.records() {
        let Ok(row) = row else {
            outcome.malformed += 1;
            continue;
        };
        let cell = |col: Option<usize>| col.and_then(|i| row.get(i)).unwrap_or("").trim();
        outcome.records.push(RawRecord {
            name: cell(name_col).to_string(),
            ingredients: ListField::Text(cell(ingredients_col).to_string()),
            directions: ListField::Text(cell(directions_col).to_string()),
            cuisine_path: non_empty(cell(cuisine_col)),
            total_time: parse_u32(cell(total_col)),
            prep_time: parse_u32(cell(prep_col)),
            cook_time: parse_u32(cell(cook_col)),
            servings: parse_u32(cell(servings_col)),
            rating: parse_f32(cell(rating_col)),
            url: non_empty(cell(url_col)),
        });
    }
    Ok(outcome)
}

fn load_json(path: &Path) -> Result<LoadOutcome> {
    let content = std::fs::read_to_string(path).map_err(|e| LarderError::io_at(e, path))?;
    let parsed: Value = serde_json::from_str(&content)?;
    let empty: Vec<Value> = Vec::new();
    let rows: &[Value] = match &parsed {
        Value::Array(rows) => rows,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(rows)) => rows,
            _ => &empty,
        },
        _ => &empty,
    };

    let mut outcome = LoadOutcome::default();
    for row in rows {
        let Value::Object(fields) = row else {
            outcome.malformed += 1;
            continue;
        };
        let field = |names: &[&str]| names.iter().find_map(|n| fields.get(*n));
        outcome.records.push(RawRecord {
            name: field(&["recipe_name", "name"])
                .and_then(Value::as_str)
                .unwrap_or("")
                .trim()
                .to_string(),
            ingredients: list_field(field(&["ingredients"])),
            directions: list_field(field(&["directions"])),
            cuisine_path: field(&["cuisine_path", "cuisine"])
                .and_then(Value::as_str)
                .and_then(non_empty),
            total_time: field(&["total_time"]).and_then(value_u32),
            prep_time: field(&["prep_time"]).and_then(value_u32),
            cook_time: field(&["cook_time"]).and_then(value_u32),
            servings: field(&["servings"]).and_then(value_u32),
            rating: field(&["rating"]).and_then(value_f32),
            url: field(&["url"]).and_then(Value::as_str).and_then(non_empty),
        });
    }
    Ok(outcome)
}

fn list_field(value: Option<&Value>) -> ListField {
    match value {
        Some(Value::Array(items)) => ListField::Items(
            items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        Some(Value::String(text)) => ListField::Text(text.clone()),
        _ => ListField::default(),
    }
}

/// Lenient integer parse: accepts "45" and "45.0"; anything else is None.
#[must_use]
pub fn parse_u32(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<u32>() {
        return Some(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f as u32)
}

/// Lenient float parse: NaN and non-numeric text become None.
#[must_use]
pub fn parse_f32(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|f| f.is_finite())
}

fn value_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f as u32),
        Value::String(s) => parse_u32(s),
        _ => None,
    }
}

fn value_f32(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as f32).filter(|f| f.is_finite()),
        Value::String(s) => parse_f32(s),
        _ => None,
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
