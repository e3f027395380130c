use std::sync::Arc;

use kiosk_traits::{LoadError, LoadErrorHandler, RenderSurface, SharedLoadErrorHandler};
use url::Url;

/// The shell's error policy: any reported navigation failure redirects the
/// surface to the bundled offline document.
///
/// The error code and failing URL are not inspected; every failure gets the
/// same redirect. The target never changes, so a failure reported while the
/// offline document is already showing re-issues an identical command.
pub struct OfflineFallback {
    offline_url: Url,
}

impl OfflineFallback {
    pub fn new(offline_url: Url) -> Self {
        Self { offline_url }
    }

    pub fn shared(offline_url: Url) -> SharedLoadErrorHandler {
        Arc::new(Self::new(offline_url))
    }

    pub fn offline_url(&self) -> &Url {
        &self.offline_url
    }
}

impl LoadErrorHandler for OfflineFallback {
    fn on_load_error(&self, surface: &dyn RenderSurface, error: &LoadError) {
        tracing::debug!(
            surface_id = surface.id(),
            code = error.code(),
            url = %error.url,
            "redirecting to offline document"
        );
        surface.navigate_to(self.offline_url.clone());
    }
}
