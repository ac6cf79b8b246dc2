//! modsync - dependency-aware mod manager
//!
//! Installs game mods from a published catalog together with everything they
//! require, toggles them in the game's mods directory, and switches between
//! saved profiles of mods and bundles.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod commands;
mod compat;
mod config;
mod content;
mod domain;
mod engine;
mod error;
mod fetcher;
mod package;
mod progress;
mod resolver;
mod store;
mod ui;
mod workspace;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use commands::Globals;

/// Log to stderr; `RUST_LOG` wins over the `--verbose` default
fn initialize_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    let globals = Globals {
        home: cli.home,
        catalog: cli.catalog,
        yes: cli.yes,
    };

    let result = match cli.command {
        Commands::Sync(args) => commands::sync::run(&globals, args),
        Commands::List(args) => commands::list::run(&globals, args),
        Commands::Show(args) => commands::show::run(&globals, args),
        Commands::Install(args) => commands::mods::install(&globals, args),
        Commands::Uninstall(args) => commands::mods::uninstall(&globals, args),
        Commands::Enable(args) => commands::mods::enable(&globals, args),
        Commands::Disable(args) => commands::mods::disable(&globals, args),
        Commands::Update(args) => commands::mods::update(&globals, args),
        Commands::Bundle(args) => commands::bundle::run(&globals, args),
        Commands::Profile(args) => commands::profile::run(&globals, args),
        Commands::Config(args) => commands::config::run(&globals, args),
        Commands::Publish(args) => commands::publish::run(&globals, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
