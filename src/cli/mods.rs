use clap::Parser;

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Refresh the catalog:\n    modsync sync\n\n\
                  Refresh and update every installed mod:\n    modsync sync --update")]
pub struct SyncArgs {
    /// Also update installed mods (on by default with auto-update-mods)
    #[arg(long)]
    pub update: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the catalog:\n    modsync list\n\n\
                  List installed mods tagged UI:\n    modsync list --installed --tag UI\n\n\
                  Search bundles:\n    modsync list --bundles starter")]
pub struct ListArgs {
    /// Filter by name (prefix, or substring for 3+ characters)
    pub query: Option<String>,

    /// Only entries carrying one of these tags
    #[arg(long = "tag", short = 't', value_name = "TAG")]
    pub tags: Vec<String>,

    /// List installed entries instead of the catalog
    #[arg(long, short = 'i')]
    pub installed: bool,

    /// List bundles
    #[arg(long, conflicts_with = "profiles")]
    pub bundles: bool,

    /// List profiles
    #[arg(long)]
    pub profiles: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Mod name
    pub name: String,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a mod and its requirements:\n    modsync install speedmod\n\n\
                  Install without loading it:\n    modsync install speedmod --disabled\n\n\
                  Install even if it clashes with an enabled mod:\n    modsync install speedmod --force")]
pub struct InstallArgs {
    /// Mod names
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Install disabled
    #[arg(long)]
    pub disabled: bool,

    /// Skip the compatibility check
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
pub struct UninstallArgs {
    /// Mod names
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Uninstall even when another installed mod requires it
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the enable command
#[derive(Parser, Debug)]
pub struct EnableArgs {
    /// Mod names
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Skip the compatibility check
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the disable command
#[derive(Parser, Debug)]
pub struct DisableArgs {
    /// Mod names
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Disable even when an enabled mod requires it
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Also disable the mods it requires
    #[arg(long)]
    pub cascade: bool,
}

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update everything with a newer catalog version:\n    modsync update\n\n\
                  Update one mod:\n    modsync update speedmod")]
pub struct UpdateArgs {
    /// Mod names (all installed mods when omitted)
    pub names: Vec<String>,
}
