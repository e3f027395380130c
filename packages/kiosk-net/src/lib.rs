//! Networking (remote document fetching) for Kiosk
//!
//! Provides an implementation of the [`kiosk_traits::net::DocumentFetcher`] trait.

use std::time::Duration;

use kiosk_traits::net::{BoxedFetchCallback, Bytes, DocumentFetcher, SharedFetcher, Url};
use kiosk_traits::{LoadError, LoadErrorKind};
use thiserror::Error;
use tokio::runtime::Handle;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:60.0) Gecko/20100101 Firefox/81.0";

/// Time allowed for a whole document fetch before it fails with a timeout
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Provider {
    rt: Handle,
    client: reqwest::Client,
}

impl Provider {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap();
        Self {
            rt: Handle::current(),
            client,
        }
    }

    pub fn shared() -> SharedFetcher {
        std::sync::Arc::new(Self::new())
    }

    async fn fetch_inner(client: reqwest::Client, url: Url) -> Result<(Url, Bytes), FetchError> {
        match url.scheme() {
            "http" | "https" => {
                let response = client
                    .get(url)
                    .header("User-Agent", USER_AGENT)
                    .send()
                    .await?;

                // A served error page (4xx/5xx) is still a served page; only
                // transport failures count as fetch errors.
                let final_url = response.url().clone();
                let bytes = response.bytes().await?;
                Ok((final_url, bytes))
            }
            scheme => Err(FetchError::UnsupportedScheme(scheme.to_string())),
        }
    }

    pub async fn fetch_async(&self, url: Url) -> Result<(Url, Bytes), FetchError> {
        let client = self.client.clone();
        Self::fetch_inner(client, url).await
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFetcher for Provider {
    fn fetch_with_callback(&self, url: Url, callback: BoxedFetchCallback) {
        let client = self.client.clone();
        self.rt.spawn(async move {
            let result = Self::fetch_inner(client, url.clone()).await;
            match &result {
                Ok((final_url, bytes)) => {
                    tracing::debug!(url = %final_url, bytes = bytes.len(), "fetched document");
                }
                Err(error) => {
                    tracing::warn!(url = %url, %error, "document fetch failed");
                }
            }
            callback(result.map_err(|e| e.to_load_error(&url)));
        });
    }
}

/// Errors produced while fetching a document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl FetchError {
    /// Classify into the navigation-error taxonomy reported to the shell
    pub fn to_load_error(&self, url: &Url) -> LoadError {
        match self {
            Self::UnsupportedScheme(_) => LoadError::new(LoadErrorKind::Unknown, url.clone())
                .with_description(self.to_string()),
            Self::Http(err) => LoadError::new(classify(err), url.clone()),
        }
    }
}

fn classify(err: &reqwest::Error) -> LoadErrorKind {
    if err.is_timeout() {
        LoadErrorKind::Timeout
    } else if err.is_connect() {
        // DNS failures surface as connect errors; the source chain says which
        if source_chain_mentions(err, "dns") {
            LoadErrorKind::HostLookup
        } else {
            LoadErrorKind::Connect
        }
    } else if err.is_body() || err.is_decode() {
        LoadErrorKind::Io
    } else {
        LoadErrorKind::Unknown
    }
}

fn source_chain_mentions(err: &reqwest::Error, needle: &str) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        if inner.to_string().to_ascii_lowercase().contains(needle) {
            return true;
        }
        source = inner.source();
    }
    false
}
