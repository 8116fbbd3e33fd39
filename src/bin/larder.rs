// src/bin/larder.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use larder_core::cli::{self, Cli, LarderExit};

fn main() {
    match run() {
        Ok(exit) => process::exit(exit.code()),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(2);
        }
    }
}

fn run() -> Result<LarderExit> {
    let cli = Cli::parse();
    cli::execute(cli.command)
}
