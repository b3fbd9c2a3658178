//! Document suppliers: compendium pages over HTTP, or HTML files on disk.

use crate::config::Config;
use crate::contract::{DocumentSupplier, FetchError};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::path::PathBuf;
use tracing::{error, info};

/// Turn a bare monster name into a page URL. Locators already containing the
/// base URL are returned unchanged.
pub fn resolve_locator(base_url: &str, locator: &str) -> String {
    if locator.contains(base_url) {
        locator.to_string()
    } else {
        format!("{base_url}{locator}")
    }
}

/// Parse `url` and check its host against `allowed_domains` (exact match).
pub fn check_allowed(url: &str, allowed_domains: &[String]) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| FetchError::InvalidUrl(url.to_string()))?;
    if allowed_domains.iter().any(|d| d.eq_ignore_ascii_case(host)) {
        Ok(parsed)
    } else {
        Err(FetchError::DomainNotAllowed {
            url: url.to_string(),
            host: host.to_string(),
        })
    }
}

/// Fetches compendium pages from the configured site.
pub struct CompendiumClient {
    client: Client,
    base_url: String,
    allowed_domains: Vec<String>,
}

impl CompendiumClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            allowed_domains: config.allowed_domains.clone(),
        })
    }
}

#[async_trait]
impl DocumentSupplier for CompendiumClient {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        let url = resolve_locator(&self.base_url, locator);
        let parsed = check_allowed(&url, &self.allowed_domains).map_err(|e| {
            error!(url = %url, error = %e, "Refusing to fetch page");
            e
        })?;

        info!(url = %parsed, "Fetching compendium page");
        let response = self.client.get(parsed).send().await.map_err(|e| {
            error!(error = ?e, url = %url, "Failed to fetch compendium page");
            FetchError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, url = %url, "Compendium responded with error status");
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        info!(url = %url, bytes = body.len(), "Fetched compendium page");
        Ok(body)
    }
}

/// Reads a saved page from disk; the locator is ignored.
pub struct FileSupplier {
    path: PathBuf,
}

impl FileSupplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSupplier for FileSupplier {
    async fn fetch(&self, _locator: &str) -> Result<String, FetchError> {
        info!(path = %self.path.display(), "Reading page from file");
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!(error = ?e, path = %self.path.display(), "Failed to read page file");
            FetchError::Io(e)
        })?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn bare_names_are_joined_to_base_url() {
        assert_eq!(
            resolve_locator(DEFAULT_BASE_URL, "Goblin"),
            "https://roll20.net/compendium/dnd5e/Goblin"
        );
        let full = "https://roll20.net/compendium/dnd5e/Adult%20Red%20Dragon";
        assert_eq!(resolve_locator(DEFAULT_BASE_URL, full), full);
    }

    #[test]
    fn only_allowed_hosts_pass() {
        let allowed = vec!["roll20.net".to_string()];
        assert!(check_allowed("https://roll20.net/compendium/dnd5e/Goblin", &allowed).is_ok());

        match check_allowed("https://example.com/compendium/dnd5e/Goblin", &allowed) {
            Err(FetchError::DomainNotAllowed { host, .. }) => assert_eq!(host, "example.com"),
            other => panic!("expected DomainNotAllowed, got {other:?}"),
        }
        match check_allowed("https://www.roll20.net/x", &allowed) {
            Err(FetchError::DomainNotAllowed { .. }) => {}
            other => panic!("expected DomainNotAllowed, got {other:?}"),
        }
        assert!(matches!(
            check_allowed("not a url", &allowed),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn client_refuses_disallowed_base_url_without_network() {
        let config = Config {
            base_url: "https://example.com/monsters/".to_string(),
            ..Config::default()
        };
        let client = CompendiumClient::new(&config).unwrap();
        let err = client.fetch("Goblin").await.unwrap_err();
        assert!(matches!(err, FetchError::DomainNotAllowed { .. }));
    }

    #[tokio::test]
    async fn file_supplier_reads_and_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("goblin.html");
        std::fs::write(&path, "<html></html>").unwrap();

        let body = FileSupplier::new(&path).fetch("ignored").await.unwrap();
        assert_eq!(body, "<html></html>");

        let missing = FileSupplier::new(dir.path().join("missing.html"));
        assert!(matches!(missing.fetch("x").await, Err(FetchError::Io(_))));
    }
}
