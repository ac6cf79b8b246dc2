//! Download progress for catalog fetches

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::error::Result;
use crate::fetcher::CatalogFetcher;

/// Spinner shown while a package or the manifest downloads
pub struct DownloadSpinner {
    pb: ProgressBar,
}

impl DownloadSpinner {
    /// Start a spinner on stderr; hidden when `quiet` or stderr is not a terminal
    pub fn start(message: String, quiet: bool) -> Self {
        let target = if quiet {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::with_draw_target(None, target);
        pb.set_style(style);
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    pub fn abandon(&self, message: String) {
        self.pb.abandon_with_message(message);
    }
}

/// [`CatalogFetcher`] that shows a spinner around every download
pub struct ProgressFetcher<'a> {
    inner: &'a dyn CatalogFetcher,
    quiet: bool,
}

impl<'a> ProgressFetcher<'a> {
    pub fn new(inner: &'a dyn CatalogFetcher, quiet: bool) -> Self {
        Self { inner, quiet }
    }

    fn with_spinner<T>(&self, message: String, call: impl FnOnce() -> Result<T>) -> Result<T> {
        let spinner = DownloadSpinner::start(message.clone(), self.quiet);
        let result = call();
        match &result {
            Ok(_) => spinner.finish(),
            Err(_) => spinner.abandon(format!("{message} failed")),
        }
        result
    }
}

impl CatalogFetcher for ProgressFetcher<'_> {
    fn manifest_version(&self) -> Result<String> {
        self.inner.manifest_version()
    }

    fn manifest(&self) -> Result<String> {
        self.with_spinner("Downloading catalog".to_string(), || self.inner.manifest())
    }

    fn mod_package(&self, name: &str) -> Result<Vec<u8>> {
        self.with_spinner(format!("Downloading {name}"), || self.inner.mod_package(name))
    }

    fn client_version(&self) -> Result<String> {
        self.inner.client_version()
    }
}
