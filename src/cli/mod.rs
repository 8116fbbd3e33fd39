// src/cli/mod.rs
pub mod args;
pub mod handlers;

use anyhow::Result;

pub use args::{Cli, Commands};

/// Process outcome for the binary. Not-found is a distinct exit code,
/// never a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LarderExit {
    Success,
    NotFound,
}

impl LarderExit {
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            LarderExit::Success => 0,
            LarderExit::NotFound => 1,
        }
    }
}

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<LarderExit> {
    match command {
        Commands::Build { input, output } => handlers::handle_build(&input, &output),
        Commands::Search {
            ingredient,
            cuisine,
            diet,
            max_time,
            graph,
            json,
        } => handlers::handle_search(&graph, ingredient, cuisine, diet, max_time, json),
        Commands::Show { id, graph, json } => handlers::handle_show(&graph, &id, json),
        Commands::Cuisines { graph } => handlers::handle_cuisines(&graph),
        Commands::Diets => handlers::handle_diets(),
        Commands::Stats { graph } => handlers::handle_stats(&graph),
    }
}
