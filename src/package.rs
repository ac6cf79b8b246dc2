//! Package archive reader
//!
//! A package is a zip archive carrying a `_metadata` entry with the JSON
//! descriptor of the mod it contains. Published packages sometimes leave a
//! trailing comma after the `priority` field; that one case is repaired
//! before parsing.

use std::borrow::Cow;
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::content;
use crate::domain::Mod;
use crate::error::{Result, package};

/// Name of the archive entry holding the mod descriptor
pub const METADATA_ENTRY: &str = "_metadata";

#[allow(clippy::expect_used)]
static PRIORITY_TRAILING_COMMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""priority": ?(-?\d+),\s*}"#).expect("priority pattern compiles")
});

/// Strip a trailing comma after `"priority": N` when it closes the object
pub fn repair_metadata(text: &str) -> Cow<'_, str> {
    PRIORITY_TRAILING_COMMA.replace_all(text, "\"priority\": $1\n}")
}

fn read_from<R: Read + Seek>(reader: R, origin: &str) -> Result<Mod> {
    let mut archive =
        zip::ZipArchive::new(reader).map_err(|e| package::malformed(origin, e.to_string()))?;
    let mut entry = archive
        .by_name(METADATA_ENTRY)
        .map_err(|_| package::malformed(origin, format!("no {METADATA_ENTRY} entry")))?;

    let mut text = String::new();
    entry
        .read_to_string(&mut text)
        .map_err(|e| package::malformed(origin, e.to_string()))?;

    let descriptor: Mod = serde_json::from_str(&repair_metadata(&text))
        .map_err(|e| package::malformed(origin, e.to_string()))?;

    if descriptor.name.trim().is_empty() {
        return Err(package::malformed(origin, "descriptor has no name"));
    }
    if content::check_mod_name(&descriptor.name).is_err() {
        return Err(package::malformed(
            origin,
            format!("'{}' cannot be used as a file name", descriptor.name),
        ));
    }
    Ok(descriptor)
}

/// Read the mod descriptor from package bytes held in memory
pub fn read_metadata(bytes: &[u8], origin: &str) -> Result<Mod> {
    read_from(Cursor::new(bytes), origin)
}

/// Read the mod descriptor from a package file on disk
pub fn read_metadata_file(path: &Path) -> Result<Mod> {
    let origin = path.display().to_string();
    let file = fs::File::open(path).map_err(|e| package::malformed(&origin, e.to_string()))?;
    read_from(file, &origin)
}
