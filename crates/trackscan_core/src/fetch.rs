//! Target resolution and content retrieval.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::error::FetchError;

/// User agent sent when the caller does not supply one.
pub const DEFAULT_USER_AGENT: &str = "trackscan";

/// Per-request timeout covering connect, transfer, and body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A parsed target: either a remote URL or a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// An `http://` or `https://` URL, kept verbatim.
    Remote(String),
    /// A `file://` URL resolved to a local path, percent-decoding applied.
    Local(PathBuf),
}

impl Target {
    /// Parses a raw target string.
    ///
    /// Accepts `http://`, `https://`, and `file://` schemes; anything else
    /// is rejected rather than guessed at.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let invalid = || FetchError::InvalidTarget {
            target: raw.to_owned(),
        };

        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Ok(Self::Remote(raw.to_owned()));
        }
        if raw.starts_with("file://") {
            let url = Url::parse(raw).map_err(|_| invalid())?;
            let path = url.to_file_path().map_err(|()| invalid())?;
            return Ok(Self::Local(path));
        }
        Err(invalid())
    }
}

/// Retrieves target content over HTTP or from the local filesystem.
///
/// One fetcher is shared by the whole worker pool; the underlying client
/// pools connections internally. Certificate validation is disabled so
/// misconfigured sites can still be scanned.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Builds a fetcher sending `user_agent` on every request.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(DEFAULT_TIMEOUT)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| FetchError::ClientInit(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetches the content behind `target`.
    ///
    /// Remote bodies are returned regardless of HTTP status; an error page
    /// can still embed trackers. Local files are read with invalid UTF-8
    /// replaced rather than rejected.
    pub async fn fetch(&self, target: &str) -> Result<String, FetchError> {
        match Target::parse(target)? {
            Target::Remote(url) => self.fetch_remote(&url).await,
            Target::Local(path) => fetch_local(path).await,
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<String, FetchError> {
        let http_err = |source| FetchError::Http {
            target: url.to_owned(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_err)?;
        let body = response.text().await.map_err(http_err)?;

        #[cfg(feature = "tracing")]
        debug!(url, bytes = body.len(), "fetched remote target");

        Ok(body)
    }
}

async fn fetch_local(path: PathBuf) -> Result<String, FetchError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| FetchError::Io { path, source })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_http_and_https() {
        assert_eq!(
            Target::parse("http://example.com").unwrap(),
            Target::Remote("http://example.com".to_owned())
        );
        assert_eq!(
            Target::parse("https://example.com/page?x=1").unwrap(),
            Target::Remote("https://example.com/page?x=1".to_owned())
        );
    }

    #[test]
    fn parse_resolves_file_urls_to_paths() {
        let target = Target::parse("file:///tmp/page.html").unwrap();
        assert_eq!(target, Target::Local(PathBuf::from("/tmp/page.html")));
    }

    #[test]
    fn parse_percent_decodes_file_urls() {
        let target = Target::parse("file:///tmp/my%20page.html").unwrap();
        assert_eq!(target, Target::Local(PathBuf::from("/tmp/my page.html")));
    }

    #[test]
    fn parse_rejects_bare_hostnames_and_other_schemes() {
        assert!(matches!(
            Target::parse("example.com"),
            Err(FetchError::InvalidTarget { .. })
        ));
        assert!(matches!(
            Target::parse("ftp://example.com"),
            Err(FetchError::InvalidTarget { .. })
        ));
        assert!(matches!(Target::parse(""), Err(FetchError::InvalidTarget { .. })));
    }

    #[tokio::test]
    async fn fetch_reads_local_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<html>tracker</html>").unwrap();

        let fetcher = Fetcher::new(DEFAULT_USER_AGENT).unwrap();
        let url = format!("file://{}", path.display());
        let content = fetcher.fetch(&url).await.unwrap();

        assert_eq!(content, "<html>tracker</html>");
    }

    #[tokio::test]
    async fn fetch_replaces_invalid_utf8_in_local_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        std::fs::write(&path, b"caf\xe9 tracker").unwrap();

        let fetcher = Fetcher::new(DEFAULT_USER_AGENT).unwrap();
        let url = format!("file://{}", path.display());
        let content = fetcher.fetch(&url).await.unwrap();

        assert!(content.contains("caf\u{fffd} tracker"));
    }

    #[tokio::test]
    async fn fetch_of_missing_file_reports_the_path() {
        let fetcher = Fetcher::new(DEFAULT_USER_AGENT).unwrap();
        let err = fetcher.fetch("file:///no/such/file.html").await.unwrap_err();

        match err {
            FetchError::Io { path, .. } => assert_eq!(path, PathBuf::from("/no/such/file.html")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
