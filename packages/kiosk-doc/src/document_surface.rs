use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use kiosk_traits::net::SharedFetcher;
use kiosk_traits::{
    NavigationOutcome, RenderSurface, SharedLoadErrorHandler, SharedSurfaceCallback, SurfacePhase,
};
use url::Url;

use crate::OFFLINE_DOCUMENT_URL;

static ID_GENERATOR: AtomicUsize = AtomicUsize::new(1);

/// Construction parameters for a [`DocumentSurface`]
pub struct DocumentSurfaceConfig {
    /// Fetcher used for remote documents
    pub fetcher: SharedFetcher,
    /// Callback that navigation outcomes are reported through
    pub callback: SharedSurfaceCallback,
    /// The bundled offline document served at [`OFFLINE_DOCUMENT_URL`]
    pub offline_document: &'static str,
    /// Backdrop color as `0RGB`
    pub background_color: u32,
}

struct DocumentState {
    /// Bumped on every commanded navigation. A completed fetch only lands if
    /// no later navigation superseded it.
    generation: u64,
    phase: SurfacePhase,
    current_url: Option<Url>,
    contents: Bytes,
}

/// A render surface that holds one web document at a time.
///
/// Remote navigations are fetched in the background and their outcome is
/// reported through the configured [`kiosk_traits::SurfaceCallback`].
/// Navigating to [`OFFLINE_DOCUMENT_URL`] swaps in the embedded offline
/// document synchronously and cannot fail.
pub struct DocumentSurface {
    id: usize,
    fetcher: SharedFetcher,
    callback: SharedSurfaceCallback,
    handler: Option<SharedLoadErrorHandler>,
    offline_url: Url,
    offline_document: &'static str,
    background_color: u32,
    state: Arc<Mutex<DocumentState>>,
}

impl DocumentSurface {
    pub fn new(config: DocumentSurfaceConfig) -> Self {
        let id = ID_GENERATOR.fetch_add(1, Ordering::SeqCst);
        Self {
            id,
            fetcher: config.fetcher,
            callback: config.callback,
            handler: None,
            offline_url: Url::parse(OFFLINE_DOCUMENT_URL).unwrap(),
            offline_document: config.offline_document,
            background_color: config.background_color,
            state: Arc::new(Mutex::new(DocumentState {
                generation: 0,
                phase: SurfacePhase::Remote,
                current_url: None,
                contents: Bytes::new(),
            })),
        }
    }

    /// The URL the offline document is served from
    pub fn offline_url(&self) -> &Url {
        &self.offline_url
    }

    fn load_offline_document(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.generation += 1;
            state.phase = SurfacePhase::Offline;
            state.current_url = Some(self.offline_url.clone());
            state.contents = Bytes::from_static(self.offline_document.as_bytes());
        }
        tracing::info!(id = self.id, "serving offline document");
        self.callback.call(
            self.id,
            NavigationOutcome::Loaded {
                url: self.offline_url.clone(),
            },
        );
    }

    fn load_remote_document(&self, url: Url) {
        let generation = {
            let mut state = self.state.lock().unwrap();
            state.generation += 1;
            state.phase = SurfacePhase::Remote;
            state.current_url = Some(url.clone());
            state.generation
        };
        tracing::info!(id = self.id, url = %url, "navigating to remote document");

        let id = self.id;
        let state = Arc::clone(&self.state);
        let callback = Arc::clone(&self.callback);
        self.fetcher.fetch_with_callback(
            url,
            Box::new(move |result| {
                let outcome = {
                    let mut state = state.lock().unwrap();
                    if state.generation != generation {
                        // Superseded navigations report nothing
                        tracing::debug!(id, "stale fetch discarded");
                        return;
                    }
                    match result {
                        Ok((final_url, bytes)) => {
                            state.contents = bytes;
                            state.current_url = Some(final_url.clone());
                            NavigationOutcome::Loaded { url: final_url }
                        }
                        Err(error) => NavigationOutcome::Failed(error),
                    }
                };
                callback.call(id, outcome);
            }),
        );
    }
}

impl RenderSurface for DocumentSurface {
    fn id(&self) -> usize {
        self.id
    }

    fn set_error_handler(&mut self, handler: SharedLoadErrorHandler) {
        self.handler = Some(handler);
    }

    fn error_handler(&self) -> Option<SharedLoadErrorHandler> {
        self.handler.clone()
    }

    fn navigate_to(&self, url: Url) {
        if url == self.offline_url {
            self.load_offline_document();
        } else {
            self.load_remote_document(url);
        }
    }

    fn phase(&self) -> SurfacePhase {
        self.state.lock().unwrap().phase
    }

    fn current_url(&self) -> Option<Url> {
        self.state.lock().unwrap().current_url.clone()
    }

    fn contents(&self) -> Bytes {
        self.state.lock().unwrap().contents.clone()
    }

    fn background_color(&self) -> u32 {
        self.background_color
    }
}
