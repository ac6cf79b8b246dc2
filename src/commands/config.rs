//! Config command implementation

use super::helpers::{Globals, Session};
use crate::cli::{ConfigArgs, ConfigSubcommand};
use crate::error::Result;
use crate::ui;

pub fn run(globals: &Globals, args: ConfigArgs) -> Result<()> {
    let mut session = Session::open(globals)?;

    match args.command {
        ConfigSubcommand::Show => {
            ui::print_config(&session.ws.config.entries(), &session.remote.location());
        }
        ConfigSubcommand::Set { key, value } => {
            let mut config = session.ws.config.clone();
            config.set(&key, &value)?;
            session.ws.set_config(config)?;
            tracing::info!(%key, "Updated configuration");

            if key.replace('_', "-") == "install-location" && !session.ws.content.is_available() {
                let shown = session
                    .ws
                    .content
                    .active_dir()
                    .map_or_else(String::new, |p| p.display().to_string());
                println!("Note: {shown} does not exist yet; mods cannot be installed until it does.");
            }
            ui::print_config(&session.ws.config.entries(), &session.remote.location());
        }
    }
    Ok(())
}
