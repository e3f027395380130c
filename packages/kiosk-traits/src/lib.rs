pub mod net;
pub use net::{BoxedFetchCallback, DocumentFetcher, DummyFetcher, SharedFetcher};

pub mod navigation;
pub use navigation::{
    DummyLoadErrorHandler, LoadError, LoadErrorHandler, LoadErrorKind, NavigationOutcome,
    SharedLoadErrorHandler,
};

mod surface;
pub use surface::{DummyRenderSurface, RenderSurface, SurfacePhase};

mod callback;
pub use callback::{DummySurfaceCallback, SharedSurfaceCallback, SurfaceCallback};
