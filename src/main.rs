//! Folio - declarative site configuration for documentation sites.
//!
//! Loads and validates `folio.toml`, then hands the resolved value to the
//! site generator. The `query` command exposes that value as JSON.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { .. } => cli::init::new_site(&config),
        Commands::Check => cli::check::check_site(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
