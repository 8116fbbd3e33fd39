pub mod cli;
pub mod config;
pub mod diet;
pub mod error;
pub mod graph;
pub mod record;
