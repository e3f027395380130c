//! Application shell for Kiosk
//!
//! Owns the winit event loop and window lifecycle, hosts one render surface
//! per window, and applies the offline-fallback policy when a navigation
//! fails. The surface itself is reached only through the capability traits
//! in [`kiosk_traits`].

mod application;
mod event;
mod fallback;
mod host;
mod renderer;
mod window;

pub use crate::application::KioskApplication;
pub use crate::event::KioskEvent;
pub use crate::fallback::OfflineFallback;
pub use crate::host::SurfaceHost;
pub use crate::renderer::{SoftbufferRenderer, SurfaceRenderer};
pub use crate::window::{View, WindowConfig};

use std::sync::Arc;

use kiosk_traits::{NavigationOutcome, SharedSurfaceCallback, SurfaceCallback};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopProxy};

/// Build an event loop for the application
pub fn create_default_event_loop<Event>() -> EventLoop<Event> {
    let mut ev_builder = EventLoop::<Event>::with_user_event();
    #[cfg(target_os = "android")]
    {
        use winit::platform::android::EventLoopBuilderExtAndroid;
        ev_builder.with_android_app(current_android_app());
    }

    let event_loop = ev_builder.build().unwrap();
    event_loop.set_control_flow(ControlFlow::Wait);

    event_loop
}

#[cfg(target_os = "android")]
pub use android_activity::AndroidApp;

#[cfg(target_os = "android")]
static ANDROID_APP: std::sync::OnceLock<android_activity::AndroidApp> = std::sync::OnceLock::new();

#[cfg(target_os = "android")]
/// Set the current [`AndroidApp`](android_activity::AndroidApp).
pub fn set_android_app(app: android_activity::AndroidApp) {
    ANDROID_APP.set(app).unwrap()
}

#[cfg(target_os = "android")]
/// Get the current [`AndroidApp`](android_activity::AndroidApp).
/// This will panic if the android activity has not been setup with [`set_android_app`].
pub fn current_android_app() -> android_activity::AndroidApp {
    ANDROID_APP.get().unwrap().clone()
}

/// A SurfaceCallback that injects navigation outcomes into our winit event loop
pub struct KioskShellCallback(EventLoopProxy<KioskEvent>);

impl KioskShellCallback {
    pub fn new(proxy: EventLoopProxy<KioskEvent>) -> Self {
        Self(proxy)
    }

    pub fn shared(proxy: EventLoopProxy<KioskEvent>) -> SharedSurfaceCallback {
        Arc::new(Self(proxy))
    }
}

impl SurfaceCallback for KioskShellCallback {
    fn call(&self, surface_id: usize, outcome: NavigationOutcome) {
        // The event loop is gone during shutdown; outcomes arriving then are dropped
        let _ = self
            .0
            .send_event(KioskEvent::LoadOutcome {
                surface_id,
                outcome,
            });
    }
}
