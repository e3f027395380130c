use std::sync::Arc;

use crate::NavigationOutcome;

/// A type which accepts the outcome of a navigation attempt and sends it back
/// to the shell (or does arbitrary things with it).
///
/// Fetches complete on worker threads; an implementation that forwards into
/// the shell's event loop is what keeps outcome handling on the UI thread.
pub trait SurfaceCallback: Send + Sync + 'static {
    fn call(&self, surface_id: usize, outcome: NavigationOutcome);
}

pub type SharedSurfaceCallback = Arc<dyn SurfaceCallback>;

/// A default noop SurfaceCallback
pub struct DummySurfaceCallback;

impl SurfaceCallback for DummySurfaceCallback {
    fn call(&self, _surface_id: usize, _outcome: NavigationOutcome) {}
}
