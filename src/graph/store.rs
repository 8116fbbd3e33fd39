// src/graph/store.rs
//! Graph persistence and the refresh handle.
//!
//! The persisted form is the entity tables only; membership indexes are
//! derived state and get rebuilt on load, so a round-trip reproduces an
//! identical query-answering graph.

use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::error::{LarderError, Result};
use crate::graph::model::RecipeGraph;

/// Saves the graph as JSON, atomically (temp file + rename).
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save(graph: &RecipeGraph, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(graph)?;
    atomic_write(path, &content)
}

/// Loads a persisted graph and rebuilds its indexes.
///
/// # Errors
/// Returns error if the file is missing, unreadable, or not a graph.
pub fn load(path: &Path) -> Result<RecipeGraph> {
    if !path.exists() {
        return Err(LarderError::GraphMissing(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|e| LarderError::io_at(e, path))?;
    let mut graph: RecipeGraph = serde_json::from_str(&content)?;
    graph.rebuild_indexes();
    Ok(graph)
}

fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content).map_err(|e| LarderError::io_at(e, &temp_path))?;
    fs::rename(&temp_path, path).map_err(|e| LarderError::io_at(e, path))?;

    Ok(())
}

/// Shared handle over the live graph. Queries run against a snapshot;
/// a refresh replaces the whole Arc, so a reader sees either the fully
/// old or the fully new graph, never a partial one.
#[derive(Debug)]
pub struct SharedGraph {
    inner: RwLock<Arc<RecipeGraph>>,
}

impl SharedGraph {
    #[must_use]
    pub fn new(graph: RecipeGraph) -> Self {
        Self {
            inner: RwLock::new(Arc::new(graph)),
        }
    }

    /// Returns the current graph. The snapshot stays valid across a
    /// concurrent `replace`.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RecipeGraph> {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(&guard)
    }

    /// Swaps in a freshly built graph.
    pub fn replace(&self, graph: RecipeGraph) {
        let next = Arc::new(graph);
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = next;
    }
}
