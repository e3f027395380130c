use kiosk_traits::{NavigationOutcome, RenderSurface, SharedLoadErrorHandler};
use url::Url;

/// Owns a render surface and applies the shell's lifecycle contract to it.
///
/// On every transition into the foreground-visible phase the error policy is
/// installed on the surface (replacing the previous installation; the
/// replacement is functionally identical each time). On the first transition
/// only, navigation to the initial URL is commanded. Navigation outcomes are
/// dispatched to whichever policy the surface currently carries; failures
/// with no installed policy are absorbed.
pub struct SurfaceHost {
    surface: Box<dyn RenderSurface>,
    policy: SharedLoadErrorHandler,
    initial_url: Url,
    started: bool,
}

impl SurfaceHost {
    pub fn new(
        surface: Box<dyn RenderSurface>,
        policy: SharedLoadErrorHandler,
        initial_url: Url,
    ) -> Self {
        Self {
            surface,
            policy,
            initial_url,
            started: false,
        }
    }

    pub fn surface(&self) -> &dyn RenderSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn RenderSurface {
        self.surface.as_mut()
    }

    /// Called on every foreground-visible transition
    pub fn resume(&mut self) {
        tracing::debug!(surface_id = self.surface.id(), "installing load-error policy");
        self.surface.set_error_handler(self.policy.clone());

        if !self.started {
            self.started = true;
            tracing::info!(
                surface_id = self.surface.id(),
                url = %self.initial_url,
                "starting initial navigation"
            );
            self.surface.navigate_to(self.initial_url.clone());
        }
    }

    /// Dispatch a navigation outcome. Must run on the thread that owns the
    /// surface.
    pub fn handle_outcome(&mut self, outcome: NavigationOutcome) {
        match outcome {
            NavigationOutcome::Loaded { url } => {
                tracing::info!(surface_id = self.surface.id(), url = %url, "document loaded");
            }
            NavigationOutcome::Failed(error) => {
                tracing::warn!(
                    surface_id = self.surface.id(),
                    code = error.code(),
                    url = %error.url,
                    "navigation failed: {}",
                    error.description
                );
                match self.surface.error_handler() {
                    Some(handler) => handler.on_load_error(self.surface.as_ref(), &error),
                    None => {
                        tracing::debug!(
                            surface_id = self.surface.id(),
                            "no policy installed; failure absorbed"
                        );
                    }
                }
            }
        }
    }
}
