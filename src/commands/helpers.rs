//! Command helper utilities
//!
//! Every command opens a [`Session`]: the workspace plus the catalog remote
//! it was configured with. Operations run through [`Session::run_guarded`],
//! which prints the outcome and turns blocking notices into confirmations.

use std::io::IsTerminal;
use std::path::PathBuf;

use console::Term;
use inquire::{Confirm, InquireError};

use crate::engine::{self, Engine, GuardedAction, Notice, Outcome};
use crate::error::{Result, config};
use crate::fetcher::Remote;
use crate::progress::ProgressFetcher;
use crate::ui;
use crate::workspace::Workspace;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub home: Option<PathBuf>,
    pub catalog: Option<String>,
    pub yes: bool,
}

pub struct Session {
    pub ws: Workspace,
    pub remote: Remote,
    yes: bool,
    /// Whether confirmations can be asked at all
    interactive: bool,
    quiet: bool,
}

impl Session {
    /// Open the workspace and connect to its catalog
    pub fn open(globals: &Globals) -> Result<Self> {
        let home = match &globals.home {
            Some(home) => home.clone(),
            None => Workspace::default_home()?,
        };
        let ws = Workspace::open(&home)?;
        let location = globals
            .catalog
            .clone()
            .unwrap_or_else(|| ws.config.catalog_location().to_string());
        tracing::debug!(home = %home.display(), catalog = %location, "Opened session");
        let remote = Remote::connect(&location)?;

        Ok(Self {
            ws,
            remote,
            yes: globals.yes,
            interactive: std::io::stdin().is_terminal() && Term::stdout().is_term(),
            quiet: !Term::stderr().is_term(),
        })
    }

    /// Run one engine operation against the remote, with download spinners
    pub fn run<F>(&mut self, op: F) -> Result<Outcome>
    where
        F: FnOnce(&mut Engine<'_>) -> Result<()>,
    {
        let fetcher = ProgressFetcher::new(&self.remote, self.quiet);
        engine::run(&mut self.ws, &fetcher, op)
    }

    /// Run an operation, print what it did and settle its blocking notices
    ///
    /// Each blocking notice is confirmed (or accepted with `--yes`); the
    /// accepted ones are then overridden in a second operation. A declined
    /// notice becomes the matching conflict error.
    pub fn run_guarded<F, O>(&mut self, op: F, mut force: O) -> Result<()>
    where
        F: FnOnce(&mut Engine<'_>) -> Result<()>,
        O: FnMut(&mut Engine<'_>, &Notice) -> Result<()>,
    {
        let outcome = self.run(op)?;
        ui::print_outcome(&outcome);

        let mut accepted: Vec<Notice> = Vec::new();
        for notice in outcome.blocking_notices() {
            if self.confirm(notice)? {
                accepted.push(notice.clone());
            } else if let Some(err) = notice.to_error() {
                return Err(err);
            }
        }
        if accepted.is_empty() {
            return Ok(());
        }

        let forced = self.run(|e| accepted.iter().try_for_each(|notice| force(e, notice)))?;
        ui::print_outcome(&forced);
        for notice in forced.blocking_notices() {
            ui::print_notice(notice);
        }
        Ok(())
    }

    fn confirm(&self, notice: &Notice) -> Result<bool> {
        if self.yes {
            tracing::debug!(?notice, "Accepted by --yes");
            return Ok(true);
        }
        if !self.interactive {
            return Ok(false);
        }
        match Confirm::new(&ui::describe_notice(notice))
            .with_default(false)
            .prompt()
        {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the catalog once if nothing is cached yet
    pub fn ensure_manifest(&mut self) -> Result<()> {
        if self.ws.has_manifest() {
            return Ok(());
        }
        tracing::info!("No cached catalog, fetching it");
        let outcome = self.run(|e| e.refresh_manifest().map(|_| ()))?;
        ui::print_outcome(&outcome);
        Ok(())
    }

    /// Content-changing commands need the game's mods directory
    pub fn require_content_root(&self) -> Result<()> {
        if self.ws.content.is_available() {
            return Ok(());
        }
        let path = self
            .ws
            .content
            .active_dir()
            .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string());
        Err(config::content_root_unavailable(path))
    }
}

/// Carry out what a confirmed blocking notice held back
pub fn force_notice(e: &mut Engine<'_>, notice: &Notice) -> Result<()> {
    match notice {
        Notice::DependencyOf {
            name,
            action: GuardedAction::Uninstall,
            ..
        } => e.uninstall_mod(name, true, false),
        Notice::DependencyOf {
            name,
            action: GuardedAction::Disable,
            ..
        } => e.disable_mod(name, true, false, false),
        Notice::Incompatible { name, .. } => e.enable_mod(name),
        Notice::BundleIncompatible { bundle, .. } => e.enable_bundle(bundle),
        Notice::ProfileIncompatible { profile, .. } => e.enable_profile(profile),
        Notice::MalformedPackage { .. } | Notice::ClientUpdate { .. } => Ok(()),
    }
}
