//! Catalog transport
//!
//! The engine only sees the [`CatalogFetcher`] trait. Two implementations
//! are provided:
//! - [`HttpFetcher`]: the catalog server (`http://` / `https://` locations)
//! - [`MirrorFetcher`]: a local directory laid out like the server
//!
//! ```text
//! <catalog>/
//! ├── manifest_version
//! ├── mod_manifest
//! ├── client_version
//! └── mod/<name>.zip
//! ```
//!
//! Catalog mutation (publishing) goes through [`CatalogPublisher`].

mod http;
mod mirror;

pub use http::HttpFetcher;
pub use mirror::MirrorFetcher;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::Bundle;
use crate::error::Result;

/// Read access to a catalog
pub trait CatalogFetcher {
    /// Current manifest version, compared against the cached manifest
    fn manifest_version(&self) -> Result<String>;

    /// Raw manifest document
    fn manifest(&self) -> Result<String>;

    /// Package archive for one mod
    fn mod_package(&self, name: &str) -> Result<Vec<u8>>;

    /// Latest published client version
    fn client_version(&self) -> Result<String>;
}

/// Catalog mutations, each guarded by a passphrase
///
/// Every call returns the message the catalog answered with.
pub trait CatalogPublisher {
    fn upload_mod(&self, upload: &ModUpload<'_>) -> Result<String>;

    fn upload_bundle(&self, bundle: &Bundle, passphrase: &str, bundle_passphrase: &str)
    -> Result<String>;

    fn delete_mod(&self, name: &str, passphrase: &str) -> Result<String>;

    fn delete_bundle(&self, name: &str, passphrase: &str) -> Result<String>;
}

/// A package to publish
#[derive(Debug, Clone)]
pub struct ModUpload<'a> {
    pub package: &'a Path,
    pub name: &'a str,
    pub tags: &'a [String],
    pub passphrase: &'a str,
}

#[derive(Serialize)]
struct DeleteModRequest<'a> {
    #[serde(rename = "mod")]
    name: &'a str,
    passphrase: &'a str,
}

#[derive(Serialize)]
struct DeleteBundleRequest<'a> {
    #[serde(rename = "bundle")]
    name: &'a str,
    passphrase: &'a str,
}

/// A catalog location resolved to its transport
#[derive(Debug)]
pub enum Remote {
    Http(HttpFetcher),
    Mirror(MirrorFetcher),
}

impl Remote {
    /// `http(s)://` locations use the server; anything else is a mirror directory
    pub fn connect(location: &str) -> Result<Self> {
        if is_http(location) {
            Ok(Remote::Http(HttpFetcher::new(location)?))
        } else {
            Ok(Remote::Mirror(MirrorFetcher::new(PathBuf::from(location))))
        }
    }

    pub fn location(&self) -> String {
        match self {
            Remote::Http(f) => f.base_url().to_string(),
            Remote::Mirror(f) => f.root().display().to_string(),
        }
    }
}

fn is_http(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl CatalogFetcher for Remote {
    fn manifest_version(&self) -> Result<String> {
        match self {
            Remote::Http(f) => f.manifest_version(),
            Remote::Mirror(f) => f.manifest_version(),
        }
    }

    fn manifest(&self) -> Result<String> {
        match self {
            Remote::Http(f) => f.manifest(),
            Remote::Mirror(f) => f.manifest(),
        }
    }

    fn mod_package(&self, name: &str) -> Result<Vec<u8>> {
        match self {
            Remote::Http(f) => f.mod_package(name),
            Remote::Mirror(f) => f.mod_package(name),
        }
    }

    fn client_version(&self) -> Result<String> {
        match self {
            Remote::Http(f) => f.client_version(),
            Remote::Mirror(f) => f.client_version(),
        }
    }
}

impl CatalogPublisher for Remote {
    fn upload_mod(&self, upload: &ModUpload<'_>) -> Result<String> {
        match self {
            Remote::Http(f) => f.upload_mod(upload),
            Remote::Mirror(f) => f.upload_mod(upload),
        }
    }

    fn upload_bundle(
        &self,
        bundle: &Bundle,
        passphrase: &str,
        bundle_passphrase: &str,
    ) -> Result<String> {
        match self {
            Remote::Http(f) => f.upload_bundle(bundle, passphrase, bundle_passphrase),
            Remote::Mirror(f) => f.upload_bundle(bundle, passphrase, bundle_passphrase),
        }
    }

    fn delete_mod(&self, name: &str, passphrase: &str) -> Result<String> {
        match self {
            Remote::Http(f) => f.delete_mod(name, passphrase),
            Remote::Mirror(f) => f.delete_mod(name, passphrase),
        }
    }

    fn delete_bundle(&self, name: &str, passphrase: &str) -> Result<String> {
        match self {
            Remote::Http(f) => f.delete_bundle(name, passphrase),
            Remote::Mirror(f) => f.delete_bundle(name, passphrase),
        }
    }
}
