use clap::{Parser, Subcommand};

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a bundle:\n    modsync bundle install starter\n\n\
                  Disable every mod of a bundle:\n    modsync bundle disable starter")]
pub struct BundleArgs {
    #[command(subcommand)]
    pub command: BundleSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BundleSubcommand {
    /// Install a bundle and its mods
    Install {
        /// Bundle name
        name: String,

        /// Install disabled
        #[arg(long)]
        disabled: bool,

        /// Skip the compatibility check
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Uninstall a bundle and the mods nothing else needs
    Uninstall {
        /// Bundle name
        name: String,

        /// Uninstall members even when other mods require them
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Enable a bundle's mods
    Enable {
        /// Bundle name
        name: String,

        /// Skip the compatibility check
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Disable a bundle's mods
    Disable {
        /// Bundle name
        name: String,

        /// Disable members even when enabled mods require them
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Re-install a bundle from the catalog
    Update {
        /// Bundle name
        name: String,
    },

    /// Show details about a bundle
    Show {
        /// Bundle name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};

    #[test]
    fn test_cli_parsing_bundle_install() {
        let cli = Cli::try_parse_from(["modsync", "bundle", "install", "starter", "-f"]).unwrap();
        match cli.command {
            Commands::Bundle(BundleArgs {
                command:
                    BundleSubcommand::Install {
                        name,
                        disabled,
                        force,
                    },
            }) => {
                assert_eq!(name, "starter");
                assert!(!disabled);
                assert!(force);
            }
            _ => panic!("Expected bundle install"),
        }
    }

    #[test]
    fn test_cli_parsing_bundle_requires_subcommand() {
        assert!(Cli::try_parse_from(["modsync", "bundle"]).is_err());
    }
}
