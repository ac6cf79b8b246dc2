//! Show command implementation

use super::helpers::{Globals, Session};
use crate::cli::ShowArgs;
use crate::error::{Result, catalog};
use crate::ui;

pub fn run(globals: &Globals, args: ShowArgs) -> Result<()> {
    let session = Session::open(globals)?;
    let snapshot = &session.ws.catalog;
    let m = snapshot
        .resolve_mod(&args.name)
        .ok_or_else(|| catalog::mod_not_found(&args.name))?;
    ui::print_mod_detail(snapshot, m);
    Ok(())
}
