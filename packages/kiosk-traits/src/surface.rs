use bytes::Bytes;
use url::Url;

use crate::navigation::SharedLoadErrorHandler;

/// The load target a surface is on from the shell's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurfacePhase {
    /// Loading (or displaying) the configured remote application
    #[default]
    Remote,
    /// Loading (or displaying) the bundled offline document. Terminal: the
    /// shell never commands a transition back to remote content.
    Offline,
}

/// The embedded component responsible for fetching and holding web content.
///
/// The shell reaches the surface only through this interface, so that tests
/// can substitute a double for the real fetch-backed implementation.
pub trait RenderSurface: 'static {
    /// Unique id used to route outcome events back to this surface
    fn id(&self) -> usize;

    /// Install `handler` as the surface's error policy, replacing any
    /// previously installed one. Must not fail in any surface state.
    fn set_error_handler(&mut self, handler: SharedLoadErrorHandler);

    /// The currently installed error policy, if any
    fn error_handler(&self) -> Option<SharedLoadErrorHandler>;

    /// Command navigation to `url`.
    ///
    /// Takes `&self` so an error handler holding the surface by reference can
    /// issue it. The outcome is reported through the surface's callback, never
    /// by return value.
    fn navigate_to(&self, url: Url);

    fn phase(&self) -> SurfacePhase;

    /// URL of the most recently commanded navigation
    fn current_url(&self) -> Option<Url>;

    /// Raw bytes of the document the surface currently holds
    fn contents(&self) -> Bytes;

    /// Backdrop color as `0RGB`, used to clear the window before the document
    /// itself is painted
    fn background_color(&self) -> u32 {
        0x00FF_FFFF
    }
}

/// A default noop RenderSurface
#[derive(Default)]
pub struct DummyRenderSurface {
    handler: Option<SharedLoadErrorHandler>,
}

impl RenderSurface for DummyRenderSurface {
    fn id(&self) -> usize {
        0
    }

    fn set_error_handler(&mut self, handler: SharedLoadErrorHandler) {
        self.handler = Some(handler);
    }

    fn error_handler(&self) -> Option<SharedLoadErrorHandler> {
        self.handler.clone()
    }

    fn navigate_to(&self, _url: Url) {}

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
