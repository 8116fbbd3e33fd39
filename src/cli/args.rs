// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_GRAPH: &str = "graph.json";

#[derive(Parser)]
#[command(name = "larder", version, about = "Recipe knowledge-graph search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the graph from a CSV or JSON recipe dataset
    Build {
        /// Path to the dataset
        input: PathBuf,
        /// Where to write the graph
        #[arg(long, short, default_value = DEFAULT_GRAPH)]
        output: PathBuf,
    },
    /// Search recipes with optional filters
    Search {
        /// Substring matched against ingredient names, case-insensitive
        #[arg(long, short)]
        ingredient: Option<String>,
        /// Cuisine label, case-insensitive
        #[arg(long, short)]
        cuisine: Option<String>,
        /// Diet: vegan, vegetarian, or gluten-free
        #[arg(long, short)]
        diet: Option<String>,
        /// Maximum total time in minutes; non-numeric values are ignored
        #[arg(long, value_name = "MINUTES")]
        max_time: Option<String>,
        #[arg(long, default_value = DEFAULT_GRAPH)]
        graph: PathBuf,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show full details for one recipe id
    Show {
        /// Recipe identifier, e.g. recipe:pad-thai
        id: String,
        #[arg(long, default_value = DEFAULT_GRAPH)]
        graph: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List the cuisine labels present in the graph
    Cuisines {
        #[arg(long, default_value = DEFAULT_GRAPH)]
        graph: PathBuf,
    },
    /// List the diet filter labels (fixed, data-independent)
    Diets,
    /// Print node counts for a persisted graph
    Stats {
        #[arg(long, default_value = DEFAULT_GRAPH)]
        graph: PathBuf,
    },
}
