//! Publish command implementations
//!
//! Uploads and deletions go straight to the catalog remote. The local
//! workspace is not modified; run `modsync sync` afterwards to see the result.

use console::Style;

use super::helpers::{Globals, Session};
use crate::catalog::Catalog;
use crate::cli::{PublishArgs, PublishSubcommand};
use crate::domain::Bundle;
use crate::error::{Result, catalog, config};
use crate::fetcher::{CatalogPublisher, ModUpload};
use crate::package;

pub fn run(globals: &Globals, args: PublishArgs) -> Result<()> {
    let mut session = Session::open(globals)?;

    let response = match args.command {
        PublishSubcommand::Mod {
            package: path,
            passphrase,
            tags,
        } => {
            let descriptor = package::read_metadata_file(&path)?;
            tracing::info!(name = %descriptor.name, version = %descriptor.version, "Uploading mod");
            session.remote.upload_mod(&ModUpload {
                package: &path,
                name: &descriptor.name,
                tags: &tags,
                passphrase: &passphrase,
            })?
        }
        PublishSubcommand::Bundle {
            friendly_name,
            mods,
            version,
            description,
            passphrase,
            bundle_passphrase,
        } => {
            session.ensure_manifest()?;
            let bundle = compose_bundle(
                &session.ws.catalog,
                &friendly_name,
                mods,
                &version,
                &description,
            )?;
            tracing::info!(name = %bundle.name, "Uploading bundle");
            session
                .remote
                .upload_bundle(&bundle, &passphrase, &bundle_passphrase)?
        }
        PublishSubcommand::DeleteMod { name, passphrase } => {
            session.remote.delete_mod(&name, &passphrase)?
        }
        PublishSubcommand::DeleteBundle { name, passphrase } => {
            session.remote.delete_bundle(&name, &passphrase)?
        }
    };

    let response = response.trim();
    if response.is_empty() {
        println!("{}", Style::new().green().apply_to("Done."));
    } else {
        println!("{}", Style::new().green().apply_to(response));
    }
    Ok(())
}

/// Build the bundle document for an upload
///
/// The key is the friendly name lowercased with spaces removed; the author
/// is every distinct member author, comma-separated.
fn compose_bundle(
    snapshot: &Catalog,
    friendly_name: &str,
    mods: Vec<String>,
    version: &str,
    description: &str,
) -> Result<Bundle> {
    let friendly_name = friendly_name.trim();
    let name: String = friendly_name
        .to_lowercase()
        .split(' ')
        .collect::<Vec<_>>()
        .concat();
    if name.is_empty() {
        return Err(config::invalid("bundle name must contain a non-space character"));
    }

    let mut authors: Vec<String> = Vec::new();
    for member in &mods {
        let published = snapshot
            .find_in_manifest(member)
            .ok_or_else(|| catalog::mod_not_found(member))?;
        if !authors.contains(&published.author) {
            authors.push(published.author.clone());
        }
    }

    Ok(Bundle {
        name,
        friendly_name: friendly_name.to_string(),
        description: description.to_string(),
        author: authors.join(","),
        version: version.to_string(),
        mods,
        disabled: false,
    })
}
