//! # contract: seams between the stat block core and the outside world
//!
//! The renderer, attribute collector and formatter are pure. Everything that
//! touches the network, the filesystem or the console sits behind the traits
//! in this module:
//!
//! - [`DocumentSupplier`] turns a locator (monster name or page URL) into
//!   the raw HTML of a compendium page.
//! - [`OutputSink`] accepts the finished stat block.
//!
//! ## Mocking & Testing
//! - [`DocumentSupplier`] is annotated for `mockall`, so the orchestrator in
//!   [`crate::cli`] can be driven without network access.

use async_trait::async_trait;
use std::fmt;
use std::io::Write;

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;

/// Failure to obtain a page from a [`DocumentSupplier`].
#[derive(Debug)]
pub enum FetchError {
    Io(std::io::Error),
    Http(reqwest::Error),
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },
    InvalidUrl(String),
    /// The locator resolved to a host outside the allow-list.
    DomainNotAllowed { url: String, host: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Io(e) => write!(f, "failed reading document: {e}"),
            FetchError::Http(e) => write!(f, "request failed: {e}"),
            FetchError::Status { url, status } => {
                write!(f, "{url} responded with status {status}")
            }
            FetchError::InvalidUrl(url) => write!(f, "invalid URL: {url}"),
            FetchError::DomainNotAllowed { url, host } => {
                write!(f, "refusing to fetch {url}: domain {host} is not allowed")
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Io(e) => Some(e),
            FetchError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        FetchError::Io(e)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Http(e)
    }
}

/// The page was fetched but carried no monster title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub locator: String,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown monster")
    }
}

impl std::error::Error for NotFound {}

/// Neither an argument nor stdin supplied a monster name or URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingLocator;

impl fmt::Display for MissingLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no monster name or URL given")
    }
}

impl std::error::Error for MissingLocator {}

/// Supplies the raw HTML for a locator.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait DocumentSupplier: Send + Sync {
    /// Fetch the page for `locator`, a bare monster name or a full page URL.
    async fn fetch(&self, locator: &str) -> Result<String, FetchError>;
}

/// Destination of the finished stat block.
pub trait OutputSink {
    /// Write `text` followed by a single newline.
    fn emit(&mut self, text: &str) -> std::io::Result<()>;
}

impl<W: Write> OutputSink for W {
    fn emit(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self, "{text}")?;
        self.flush()
    }
}
