//! HTTP catalog client

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response, multipart};

use super::{CatalogFetcher, CatalogPublisher, DeleteBundleRequest, DeleteModRequest, ModUpload};
use crate::domain::Bundle;
use crate::error::{Result, network};

/// Default HTTP request timeout (30 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Catalog server client
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("modsync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| network::unavailable(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> Result<Response> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                network::unavailable(format!(
                    "request to {url} timed out after {}s",
                    self.timeout.as_secs()
                ))
            } else {
                network::unavailable(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(network::unavailable(format!(
                "HTTP {} for {url}",
                response.status()
            )));
        }
        Ok(response)
    }

    fn get_text(&self, path: &str) -> Result<String> {
        let text = self.get(path)?.text()?;
        Ok(text.trim().to_string())
    }

    /// Send a mutation; a non-success status carries the server's message
    fn post(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        if status.is_success() {
            Ok(body)
        } else if body.trim().is_empty() {
            Err(network::rejected(format!("HTTP {status}")))
        } else {
            Err(network::rejected(body))
        }
    }
}

impl CatalogFetcher for HttpFetcher {
    fn manifest_version(&self) -> Result<String> {
        self.get_text("manifest_version")
    }

    fn manifest(&self) -> Result<String> {
        Ok(self.get("mod_manifest")?.text()?)
    }

    fn mod_package(&self, name: &str) -> Result<Vec<u8>> {
        let bytes = self.get(&format!("mod/{name}"))?.bytes()?;
        Ok(bytes.to_vec())
    }

    fn client_version(&self) -> Result<String> {
        self.get_text("client_version")
    }
}

impl CatalogPublisher for HttpFetcher {
    fn upload_mod(&self, upload: &ModUpload<'_>) -> Result<String> {
        let form = multipart::Form::new().file("file", upload.package)?;
        let request = self
            .client
            .post(self.url("upload_mod"))
            .header("passphrase", upload.passphrase)
            .header("name", upload.name)
            .header("tags", upload.tags.join(","))
            .multipart(form);
        self.post(request)
    }

    fn upload_bundle(
        &self,
        bundle: &Bundle,
        passphrase: &str,
        bundle_passphrase: &str,
    ) -> Result<String> {
        let request = self
            .client
            .post(self.url("upload_bundle"))
            .header("passphrase", passphrase)
            .header("bundle_passphrase", bundle_passphrase)
            .json(bundle);
        self.post(request)
    }

    fn delete_mod(&self, name: &str, passphrase: &str) -> Result<String> {
        let request = self
            .client
            .post(self.url("delete_mod"))
            .json(&DeleteModRequest { name, passphrase });
        self.post(request)
    }

    fn delete_bundle(&self, name: &str, passphrase: &str) -> Result<String> {
        let request = self
            .client
            .post(self.url("delete_bundle"))
            .json(&DeleteBundleRequest { name, passphrase });
        self.post(request)
    }
}
