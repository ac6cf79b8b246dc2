//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - mods: sync, list, show and the single-mod transitions
//! - bundle: bundle subcommands
//! - profile: profile subcommands
//! - config: configuration subcommands
//! - publish: catalog publishing subcommands
//! - completions: completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle;
pub mod completions;
pub mod config;
pub mod mods;
pub mod profile;
pub mod publish;

pub use bundle::{BundleArgs, BundleSubcommand};
pub use completions::CompletionsArgs;
pub use config::{ConfigArgs, ConfigSubcommand};
pub use mods::{
    DisableArgs, EnableArgs, InstallArgs, ListArgs, ShowArgs, SyncArgs, UninstallArgs, UpdateArgs,
};
pub use profile::{ProfileArgs, ProfileSubcommand};
pub use publish::{PublishArgs, PublishSubcommand};

/// modsync - mod manager for catalog-published game mods
///
/// Install, enable and update mods, bundles and profiles with their dependencies.
#[derive(Parser, Debug)]
#[command(
    name = "modsync",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Dependency-aware mod manager for catalog-published game mods",
    long_about = "modsync installs game mods from a published catalog together with the mods \
                  they require, keeps them enabled or disabled in the game's mods directory, and \
                  switches between saved sets of mods and bundles (profiles).",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  modsync config set install-location ~/Games/YOMI  \x1b[90m# Point at the game\x1b[0m\n   \
                  modsync sync                                     \x1b[90m# Refresh the catalog\x1b[0m\n   \
                  modsync install speedmod                         \x1b[90m# Install with dependencies\x1b[0m\n   \
                  modsync disable speedmod                         \x1b[90m# Keep it, but unload it\x1b[0m\n   \
                  modsync profile capture ranked                   \x1b[90m# Save the current setup\x1b[0m\n   \
                  modsync profile enable casual                    \x1b[90m# Switch setups\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// modsync home directory (defaults to the platform data directory)
    #[arg(long, global = true, env = "MODSYNC_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Catalog server URL or mirror directory, overriding the configured one
    #[arg(long, global = true, env = "MODSYNC_CATALOG", value_name = "URL|DIR")]
    pub catalog: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Refresh the catalog and reconcile the mods directory
    Sync(SyncArgs),

    /// List mods, bundles or profiles
    List(ListArgs),

    /// Show details about a mod
    Show(ShowArgs),

    /// Install mods and everything they require
    Install(InstallArgs),

    /// Uninstall mods and the requirements nothing else needs
    Uninstall(UninstallArgs),

    /// Enable installed mods
    Enable(EnableArgs),

    /// Disable installed mods
    Disable(DisableArgs),

    /// Update installed mods to the catalog version
    Update(UpdateArgs),

    /// Manage bundles
    Bundle(BundleArgs),

    /// Manage profiles
    Profile(ProfileArgs),

    /// Show or change the configuration
    Config(ConfigArgs),

    /// Publish to or remove from the catalog
    Publish(PublishArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["modsync", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_show() {
        let cli = Cli::try_parse_from(["modsync", "show", "speedmod"]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(args.name, "speedmod"),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["modsync", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "modsync",
            "-v",
            "--yes",
            "--home",
            "/tmp/modsync-home",
            "--catalog",
            "/tmp/mirror",
            "list",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.yes);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/modsync-home")));
        assert_eq!(cli.catalog.as_deref(), Some("/tmp/mirror"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["modsync", "install", "a", "-y"]).unwrap();
        assert!(cli.yes);
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["modsync", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "bash"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["modsync"]).is_err());
    }
}
