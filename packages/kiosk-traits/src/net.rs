use std::sync::Arc;

pub use bytes::Bytes;
pub use url::Url;

use crate::navigation::LoadError;

pub type SharedFetcher = Arc<dyn DocumentFetcher>;
pub type BoxedFetchCallback =
    Box<dyn FnOnce(Result<(Url, Bytes), LoadError>) + Send + Sync + 'static>;

/// A type that fetches documents for a render surface.
///
/// Fetching happens in the background; `callback` is invoked exactly once
/// with the final URL and body on success, or with a classified [`LoadError`]
/// when the document could not be retrieved at the transport level. A served
/// error page (HTTP 4xx/5xx) is a retrieved document, not a `LoadError`.
pub trait DocumentFetcher: Send + Sync + 'static {
    fn fetch_with_callback(&self, url: Url, callback: BoxedFetchCallback);
}

/// A default noop DocumentFetcher. Never invokes the callback.
pub struct DummyFetcher;

impl DocumentFetcher for DummyFetcher {
    fn fetch_with_callback(&self, _url: Url, _callback: BoxedFetchCallback) {}
}
