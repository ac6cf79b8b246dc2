//! Sync command implementation
//!
//! The startup pass of the mod manager: optional client version check,
//! manifest refresh, detection of sideloaded packages and optional updates.

use console::Style;

use super::helpers::{Globals, Session};
use crate::cli::SyncArgs;
use crate::engine::SyncOptions;
use crate::error::Result;
use crate::ui;

pub fn run(globals: &Globals, args: SyncArgs) -> Result<()> {
    let mut session = Session::open(globals)?;

    let options = SyncOptions {
        client_version: session
            .ws
            .config
            .auto_update_client
            .then(|| env!("CARGO_PKG_VERSION").to_string()),
        update_mods: args.update || session.ws.config.auto_update_mods,
    };
    if !session.ws.content.is_available() {
        tracing::warn!("Install location unavailable, local mods are not checked");
    }

    let outcome = session.run(|e| e.sync(&options))?;
    ui::print_outcome(&outcome);

    if session.ws.network.offline {
        let reason = session
            .ws
            .network
            .last_error
            .as_deref()
            .unwrap_or("unknown error");
        println!(
            "{} catalog unavailable ({reason}), working offline",
            Style::new().yellow().bold().apply_to("warning:")
        );
    } else if outcome.is_noop() {
        println!(
            "Catalog {} is up to date.",
            session.ws.catalog.manifest.version
        );
    }
    Ok(())
}
