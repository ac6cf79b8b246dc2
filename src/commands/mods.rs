//! Mod command implementations
//!
//! Thin wrappers: validate names against the catalog, then hand each name to
//! the engine. Unknown names fail before anything changes.

use super::helpers::{Globals, Session, force_notice};
use crate::cli::{DisableArgs, EnableArgs, InstallArgs, UninstallArgs, UpdateArgs};
use crate::engine::{GuardedAction, Notice};
use crate::error::{Result, catalog};
use crate::ui;

fn require_published(session: &Session, names: &[String]) -> Result<()> {
    match names
        .iter()
        .find(|n| session.ws.catalog.find_in_manifest(n).is_none())
    {
        Some(missing) => Err(catalog::mod_not_found(missing)),
        None => Ok(()),
    }
}

fn require_installed(session: &Session, names: &[String]) -> Result<()> {
    match names.iter().find(|n| !session.ws.catalog.is_installed(n)) {
        Some(missing) => Err(catalog::mod_not_found(missing)),
        None => Ok(()),
    }
}

pub fn install(globals: &Globals, args: InstallArgs) -> Result<()> {
    let mut session = Session::open(globals)?;
    session.require_content_root()?;
    session.ensure_manifest()?;
    require_published(&session, &args.names)?;

    if args.disabled {
        let outcome = session.run(|e| {
            args.names
                .iter()
                .try_for_each(|name| e.install_mod(name, false))
        })?;
        ui::print_outcome(&outcome);
        return Ok(());
    }

    let force = args.force;
    session.run_guarded(
        |e| {
            args.names
                .iter()
                .try_for_each(|name| e.install_mod_checked(name, force))
        },
        force_notice,
    )
}

pub fn uninstall(globals: &Globals, args: UninstallArgs) -> Result<()> {
    let mut session = Session::open(globals)?;
    session.require_content_root()?;
    require_installed(&session, &args.names)?;

    let force = args.force;
    session.run_guarded(
        |e| {
            args.names
                .iter()
                .try_for_each(|name| e.uninstall_mod(name, force, false))
        },
        force_notice,
    )
}

pub fn enable(globals: &Globals, args: EnableArgs) -> Result<()> {
    let mut session = Session::open(globals)?;
    session.require_content_root()?;
    require_installed(&session, &args.names)?;

    let force = args.force;
    session.run_guarded(
        |e| {
            args.names
                .iter()
                .try_for_each(|name| e.enable_mod_checked(name, force))
        },
        force_notice,
    )
}

pub fn disable(globals: &Globals, args: DisableArgs) -> Result<()> {
    let mut session = Session::open(globals)?;
    session.require_content_root()?;
    require_installed(&session, &args.names)?;

    let (force, cascade) = (args.force, args.cascade);
    session.run_guarded(
        |e| {
            args.names
                .iter()
                .try_for_each(|name| e.disable_mod(name, force, false, cascade))
        },
        |e, notice| match notice {
            Notice::DependencyOf {
                name,
                action: GuardedAction::Disable,
                ..
            } => e.disable_mod(name, true, false, cascade),
            other => force_notice(e, other),
        },
    )
}

pub fn update(globals: &Globals, args: UpdateArgs) -> Result<()> {
    let mut session = Session::open(globals)?;
    session.require_content_root()?;
    session.ensure_manifest()?;
    require_installed(&session, &args.names)?;

    let outcome = if args.names.is_empty() {
        session.run(|e| e.update_all())?
    } else {
        session.run(|e| args.names.iter().try_for_each(|name| e.update_mod(name)))?
    };
    if outcome.is_noop() {
        println!("Everything is up to date.");
    }
    ui::print_outcome(&outcome);
    Ok(())
}
