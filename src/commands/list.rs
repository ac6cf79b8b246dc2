//! List command implementation
//!
//! Lists catalog or installed mods, bundles or profiles from the cached
//! state. Never touches the network.

use crate::catalog::SearchFilter;
use crate::cli::ListArgs;
use crate::domain::{Bundle, Mod};
use crate::error::Result;
use crate::ui;

use super::helpers::{Globals, Session};

pub fn run(globals: &Globals, args: ListArgs) -> Result<()> {
    let session = Session::open(globals)?;
    let catalog = &session.ws.catalog;
    let filter = SearchFilter::new(args.query.unwrap_or_default(), args.tags);

    if args.profiles {
        ui::print_profiles(catalog, &catalog.search_profiles(&filter));
        return Ok(());
    }

    if !args.installed && !session.ws.has_manifest() {
        println!("No catalog cached yet. Run 'modsync sync' first.");
        return Ok(());
    }

    if args.bundles {
        let (source, heading): (&[Bundle], &str) = if args.installed {
            (catalog.installed_bundles.as_slice(), "Installed bundles")
        } else {
            (catalog.manifest.bundles.as_slice(), "Catalog bundles")
        };
        ui::print_bundles(catalog, &catalog.search_bundles(source, &filter), heading);
    } else {
        let (source, heading): (&[Mod], &str) = if args.installed {
            (catalog.installed_mods.as_slice(), "Installed mods")
        } else {
            (catalog.manifest.mods.as_slice(), "Catalog mods")
        };
        ui::print_mods(catalog, &catalog.search_mods(source, &filter), heading);
    }
    Ok(())
}
