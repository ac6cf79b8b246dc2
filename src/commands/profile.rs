//! Profile command implementations

use std::fs;

use super::helpers::{Globals, Session, force_notice};
use crate::cli::{ProfileArgs, ProfileSubcommand};
use crate::error::{Result, catalog, fs as fs_err};
use crate::ui;

pub fn run(globals: &Globals, args: ProfileArgs) -> Result<()> {
    let mut session = Session::open(globals)?;

    match args.command {
        ProfileSubcommand::Create {
            name,
            mods,
            bundles,
        } => {
            let outcome = session.run(|e| e.create_profile(&name, mods, bundles))?;
            ui::print_outcome(&outcome);
            Ok(())
        }
        ProfileSubcommand::Capture { name } => {
            let outcome = session.run(|e| e.capture_profile(&name))?;
            ui::print_outcome(&outcome);
            Ok(())
        }
        ProfileSubcommand::Enable { name, force } => {
            require_profile(&session, &name)?;
            session.require_content_root()?;
            session.ensure_manifest()?;
            session.run_guarded(|e| e.enable_profile_checked(&name, force), force_notice)
        }
        ProfileSubcommand::Disable { name } => {
            require_profile(&session, &name)?;
            session.require_content_root()?;
            let outcome = session.run(|e| e.disable_profile(&name))?;
            ui::print_outcome(&outcome);
            Ok(())
        }
        ProfileSubcommand::Update { name } => {
            require_profile(&session, &name)?;
            session.require_content_root()?;
            session.ensure_manifest()?;
            let outcome = session.run(|e| e.update_profile(&name))?;
            if outcome.is_noop() {
                println!("Profile {name} is up to date.");
            }
            ui::print_outcome(&outcome);
            Ok(())
        }
        ProfileSubcommand::Delete { name } => {
            require_profile(&session, &name)?;
            let outcome = session.run(|e| e.delete_profile(&name))?;
            ui::print_outcome(&outcome);
            Ok(())
        }
        ProfileSubcommand::Import { file } => {
            let json = fs::read_to_string(&file)
                .map_err(|e| fs_err::read_failed(file.display().to_string(), e.to_string()))?;
            let outcome = session.run(|e| e.import_profile(&json).map(|_| ()))?;
            ui::print_outcome(&outcome);
            Ok(())
        }
        ProfileSubcommand::Export { name, output } => {
            let mut json = String::new();
            session.run(|e| {
                json = e.export_profile(&name)?;
                Ok(())
            })?;
            match output {
                Some(path) => {
                    fs::write(&path, &json).map_err(|e| {
                        fs_err::write_failed(path.display().to_string(), e.to_string())
                    })?;
                    println!("Exported profile {name} to {}", path.display());
                }
                None => print!("{json}"),
            }
            Ok(())
        }
        ProfileSubcommand::Show { name } => {
            let snapshot = &session.ws.catalog;
            let profile = snapshot
                .find_profile(&name)
                .ok_or_else(|| catalog::profile_not_found(&name))?;
            ui::print_profile_detail(snapshot, profile);
            Ok(())
        }
    }
}

fn require_profile(session: &Session, name: &str) -> Result<()> {
    if session.ws.catalog.find_profile(name).is_some() {
        Ok(())
    } else {
        Err(catalog::profile_not_found(name))
    }
}
