//! The offline-fallback policy redirects unconditionally

use std::sync::Mutex;

use bytes::Bytes;
use kiosk_doc::OFFLINE_DOCUMENT_URL;
use kiosk_shell::OfflineFallback;
use kiosk_traits::{
    LoadError, LoadErrorHandler, LoadErrorKind, RenderSurface, SharedLoadErrorHandler,
    SurfacePhase,
};
use url::Url;

/// Surface double that only records commanded navigations
#[derive(Default)]
struct NavigationLog {
    navigations: Mutex<Vec<Url>>,
}

impl RenderSurface for NavigationLog {
    fn id(&self) -> usize {
        7
    }

    fn set_error_handler(&mut self, _handler: SharedLoadErrorHandler) {}

    fn error_handler(&self) -> Option<SharedLoadErrorHandler> {
        None
    }

    fn navigate_to(&self, url: Url) {
        self.navigations.lock().unwrap().push(url);
    }

    fn phase(&self) -> SurfacePhase {
        SurfacePhase::Remote
    }

    fn current_url(&self) -> Option<Url> {
        None
    }

    fn contents(&self) -> Bytes {
        Bytes::new()
    }
}

fn offline_url() -> Url {
    Url::parse(OFFLINE_DOCUMENT_URL).unwrap()
}

#[test]
fn every_error_kind_redirects_to_the_same_target() {
    let kinds = [
        LoadErrorKind::Unknown,
        LoadErrorKind::HostLookup,
        LoadErrorKind::Connect,
        LoadErrorKind::Io,
        LoadErrorKind::Timeout,
    ];

    let policy = OfflineFallback::new(offline_url());
    let surface = NavigationLog::default();
    for kind in kinds {
        let error = LoadError::new(kind, Url::parse("https://example.com/app").unwrap());
        policy.on_load_error(&surface, &error);
    }

    let navigations = surface.navigations.lock().unwrap();
    assert_eq!(navigations.len(), kinds.len());
    assert!(navigations.iter().all(|url| *url == offline_url()));
}

#[test]
fn redirect_ignores_the_failing_url_and_description() {
    let failing = [
        "https://example.com/",
        "https://example.com/deep/path?q=1",
        "http://127.0.0.1:1/",
        OFFLINE_DOCUMENT_URL,
    ];

    let policy = OfflineFallback::new(offline_url());
    let surface = NavigationLog::default();
    for url in failing {
        let error = LoadError::new(LoadErrorKind::Unknown, Url::parse(url).unwrap())
            .with_description("some opaque platform message");
        policy.on_load_error(&surface, &error);
    }

    let navigations = surface.navigations.lock().unwrap();
    assert_eq!(navigations.len(), failing.len());
    assert!(navigations.iter().all(|url| *url == offline_url()));
}

#[test]
fn the_redirect_target_is_fixed_at_construction() {
    let policy = OfflineFallback::new(offline_url());
    assert_eq!(policy.offline_url(), &offline_url());
}
