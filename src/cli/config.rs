use clap::{Parser, Subcommand};

/// Arguments for the config command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the configuration:\n    modsync config show\n\n\
                  Set the game directory:\n    modsync config set install-location ~/Games/YOMI\n\n\
                  Update mods on every sync:\n    modsync config set auto-update-mods true")]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print every setting
    Show,

    /// Change one setting
    Set {
        /// install-location, auto-update-client, auto-update-mods or catalog-url
        key: String,

        /// New value
        value: String,
    },
}
