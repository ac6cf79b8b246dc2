//! Bundle command implementations

use super::helpers::{Globals, Session, force_notice};
use crate::cli::{BundleArgs, BundleSubcommand};
use crate::error::{Result, catalog};
use crate::ui;

pub fn run(globals: &Globals, args: BundleArgs) -> Result<()> {
    let mut session = Session::open(globals)?;

    match args.command {
        BundleSubcommand::Install {
            name,
            disabled,
            force,
        } => {
            session.require_content_root()?;
            session.ensure_manifest()?;
            if session.ws.catalog.find_bundle_in_manifest(&name).is_none() {
                return Err(catalog::bundle_not_found(name));
            }
            if disabled {
                let outcome = session.run(|e| e.install_bundle(&name, false))?;
                ui::print_outcome(&outcome);
                return Ok(());
            }
            session.run_guarded(|e| e.install_bundle_checked(&name, force), force_notice)
        }
        BundleSubcommand::Uninstall { name, force } => {
            session.require_content_root()?;
            require_installed(&session, &name)?;
            let outcome = session.run(|e| e.uninstall_bundle(&name, force))?;
            ui::print_outcome(&outcome);
            Ok(())
        }
        BundleSubcommand::Enable { name, force } => {
            session.require_content_root()?;
            require_installed(&session, &name)?;
            session.run_guarded(|e| e.enable_bundle_checked(&name, force), force_notice)
        }
        BundleSubcommand::Disable { name, force } => {
            session.require_content_root()?;
            require_installed(&session, &name)?;
            let outcome = session.run(|e| e.disable_bundle(&name, force))?;
            ui::print_outcome(&outcome);
            Ok(())
        }
        BundleSubcommand::Update { name } => {
            session.require_content_root()?;
            session.ensure_manifest()?;
            if session.ws.catalog.find_bundle_in_manifest(&name).is_none() {
                return Err(catalog::bundle_not_found(name));
            }
            if !session.ws.catalog.is_bundle_missing_or_stale(&name) {
                println!("Bundle {name} is up to date.");
                return Ok(());
            }
            let outcome = session.run(|e| e.update_bundle(&name))?;
            ui::print_outcome(&outcome);
            Ok(())
        }
        BundleSubcommand::Show { name } => {
            let snapshot = &session.ws.catalog;
            let bundle = snapshot
                .resolve_bundle(&name)
                .ok_or_else(|| catalog::bundle_not_found(&name))?;
            ui::print_bundle_detail(snapshot, bundle);
            Ok(())
        }
    }
}

fn require_installed(session: &Session, name: &str) -> Result<()> {
    if session.ws.catalog.is_bundle_installed(name) {
        Ok(())
    } else {
        Err(catalog::bundle_not_found(name))
    }
}
