//! State transition engine
//!
//! Decides, for every install/uninstall/enable/disable/update request, which
//! units change state, in what order and under which constraints.
//!
//! ## Operation Flow
//!
//! ```text
//! run(workspace, fetcher, op)
//!   ├─ op(&mut Engine)        nested mod/bundle/profile transitions
//!   │    ├─ mutate the catalog snapshot
//!   │    ├─ move package files between the content roots
//!   │    └─ record changes and notices
//!   └─ finish()               persist every dirty document once
//! ```
//!
//! Persistence happens even when `op` fails half way: steps already applied
//! stay applied. Nothing is rolled back.

mod bundles;
mod guarded;
mod mods;
mod outcome;
mod profiles;
mod sync;


pub use outcome::{Change, Entity, GuardedAction, Notice, Outcome, Transition};
pub use sync::SyncOptions;

use std::collections::HashSet;

use crate::error::{ModsyncError, Result, network};
use crate::fetcher::CatalogFetcher;
use crate::store::Document;
use crate::workspace::Workspace;

/// Documents touched by the current operation
#[derive(Debug, Default, Clone, Copy)]
struct Dirty {
    mods: bool,
    bundles: bool,
    profiles: bool,
}

/// One top-level operation in progress
pub struct Engine<'a> {
    ws: &'a mut Workspace,
    fetcher: &'a dyn CatalogFetcher,
    outcome: Outcome,
    dirty: Dirty,
    /// Mods currently being enabled or disabled further up the recursion
    enabling: HashSet<String>,
    disabling: HashSet<String>,
}

/// Run `op` as one top-level operation and persist what it changed
pub fn run<'a, F>(ws: &'a mut Workspace, fetcher: &'a dyn CatalogFetcher, op: F) -> Result<Outcome>
where
    F: FnOnce(&mut Engine<'a>) -> Result<()>,
{
    let mut engine = Engine::new(ws, fetcher);
    let result = op(&mut engine);
    let committed = engine.finish();

    match (result, committed) {
        (Ok(()), committed) => committed,
        (Err(e), Ok(outcome)) => {
            if !outcome.changes.is_empty() {
                tracing::warn!(
                    applied = outcome.changes.len(),
                    "Operation failed after applying some changes"
                );
            }
            Err(e)
        }
        (Err(e), Err(persist)) => {
            tracing::error!(error = %persist, "Failed to persist state after error");
            Err(e)
        }
    }
}

impl<'a> Engine<'a> {
    pub fn new(ws: &'a mut Workspace, fetcher: &'a dyn CatalogFetcher) -> Self {
        Self {
            ws,
            fetcher,
            outcome: Outcome::default(),
            dirty: Dirty::default(),
            enabling: HashSet::new(),
            disabling: HashSet::new(),
        }
    }

    /// Read access to the workspace for callers composing operations
    pub fn workspace(&self) -> &Workspace {
        self.ws
    }

    /// Persist every dirty document and hand back the outcome
    pub fn finish(mut self) -> Result<Outcome> {
        let pending = [
            (self.dirty.mods, Document::InstalledMods),
            (self.dirty.bundles, Document::InstalledBundles),
            (self.dirty.profiles, Document::Profiles),
        ];
        for (dirty, document) in pending {
            if dirty {
                self.ws.persist(document)?;
                self.outcome.written.push(document);
            }
        }
        Ok(self.outcome)
    }

    /// Call the fetcher unless the workspace already went offline
    ///
    /// Only [`Engine::refresh_manifest`] goes back to the network once offline.
    fn fetch<T>(&mut self, call: impl FnOnce(&dyn CatalogFetcher) -> Result<T>) -> Result<T> {
        if self.ws.network.offline {
            let message = self
                .ws
                .network
                .last_error
                .clone()
                .unwrap_or_else(|| "offline".to_string());
            return Err(network::unavailable(message));
        }
        self.fetch_anyway(call)
    }

    /// Call the fetcher, flipping the workspace offline on a transport failure
    fn fetch_anyway<T>(&mut self, call: impl FnOnce(&dyn CatalogFetcher) -> Result<T>) -> Result<T> {
        match call(self.fetcher) {
            Ok(value) => Ok(value),
            Err(e) => {
                if e.is_network() {
                    self.ws.network.mark_offline(network_message(&e));
                }
                Err(e)
            }
        }
    }

    fn changed(&mut self, entity: Entity, name: &str, transition: Transition) {
        self.outcome.changes.push(Change {
            entity,
            name: name.to_string(),
            transition,
        });
    }

    fn notice(&mut self, notice: Notice) {
        tracing::debug!(?notice, "Recorded notice");
        self.outcome.notices.push(notice);
    }

    /// Turn a malformed package inside a multi-package step into a notice
    fn tolerate_malformed(&mut self, name: &str, result: Result<()>) -> Result<()> {
        match result {
            Err(e) if e.is_malformed_package() => {
                tracing::warn!(name, error = %e, "Skipping malformed package");
                self.notice(Notice::MalformedPackage {
                    name: name.to_string(),
                    reason: e.to_string(),
                });
                Ok(())
            }
            other => other,
        }
    }

    /// Content operations are no-ops without an active root
    fn content_available(&self, operation: &str, name: &str) -> bool {
        let available = self.ws.content.is_available();
        if !available {
            tracing::warn!(operation, name, "Install location unavailable, skipping");
        }
        available
    }
}

fn network_message(e: &ModsyncError) -> String {
    match e {
        ModsyncError::NetworkUnavailable { message } => message.clone(),
        other => other.to_string(),
    }
}
