use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for the profile command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Save the current setup:\n    modsync profile capture ranked\n\n\
                  Define a profile by hand:\n    modsync profile create casual --mod skins --bundle starter\n\n\
                  Switch to a profile:\n    modsync profile enable casual\n\n\
                  Share a profile:\n    modsync profile export casual -o casual.json")]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfileSubcommand {
    /// Create (or replace) a profile from explicit lists
    Create {
        /// Profile name
        name: String,

        /// Mods in the profile
        #[arg(long = "mod", short = 'm', value_name = "MOD")]
        mods: Vec<String>,

        /// Bundles in the profile
        #[arg(long = "bundle", short = 'b', value_name = "BUNDLE")]
        bundles: Vec<String>,
    },

    /// Save the enabled mods and bundles as a profile
    Capture {
        /// Profile name
        name: String,
    },

    /// Make a profile the active one
    Enable {
        /// Profile name
        name: String,

        /// Skip the compatibility check
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Disable a profile and its members
    Disable {
        /// Profile name
        name: String,
    },

    /// Install missing or outdated members of a profile
    Update {
        /// Profile name
        name: String,
    },

    /// Delete a profile, leaving its members as they are
    Delete {
        /// Profile name
        name: String,
    },

    /// Import a profile from a JSON file
    Import {
        /// Profile document
        file: PathBuf,
    },

    /// Export a profile as JSON
    Export {
        /// Profile name
        name: String,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show details about a profile
    Show {
        /// Profile name
        name: String,
    },
}
