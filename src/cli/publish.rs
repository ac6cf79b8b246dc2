use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for the publish command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Upload a mod package:\n    modsync publish mod ./speedmod.zip --passphrase secret --tag Gameplay\n\n\
                  Upload a bundle:\n    modsync publish bundle \"Starter Pack\" --mod a --mod b --version 1 --passphrase secret\n\n\
                  Remove a mod:\n    modsync publish delete-mod speedmod --passphrase secret")]
pub struct PublishArgs {
    #[command(subcommand)]
    pub command: PublishSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PublishSubcommand {
    /// Upload a mod package; its name comes from the package metadata
    Mod {
        /// Package archive
        package: PathBuf,

        /// Publisher passphrase
        #[arg(long, env = "MODSYNC_PASSPHRASE", hide_env_values = true)]
        passphrase: String,

        /// Catalog tags
        #[arg(long = "tag", short = 't', value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Upload a bundle of published mods
    Bundle {
        /// Display name; the bundle key is derived from it
        friendly_name: String,

        /// Member mods
        #[arg(long = "mod", short = 'm', value_name = "MOD", required = true)]
        mods: Vec<String>,

        /// Bundle version
        #[arg(long, default_value = "1")]
        version: String,

        /// Bundle description
        #[arg(long, default_value = "")]
        description: String,

        /// Publisher passphrase
        #[arg(long, env = "MODSYNC_PASSPHRASE", hide_env_values = true)]
        passphrase: String,

        /// Passphrase guarding later changes to this bundle
        #[arg(long, default_value = "")]
        bundle_passphrase: String,
    },

    /// Remove a mod from the catalog
    DeleteMod {
        /// Mod name
        name: String,

        /// Publisher passphrase
        #[arg(long, env = "MODSYNC_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },

    /// Remove a bundle from the catalog
    DeleteBundle {
        /// Bundle name
        name: String,

        /// Bundle passphrase
        #[arg(long, env = "MODSYNC_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },
}
