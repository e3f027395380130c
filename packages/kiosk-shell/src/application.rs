use std::collections::HashMap;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::event::KioskEvent;
use crate::renderer::SurfaceRenderer;
use crate::{View, WindowConfig};

/// Winit application driver: owns the views and routes lifecycle and user
/// events into them.
pub struct KioskApplication<Rend: SurfaceRenderer> {
    pub windows: HashMap<WindowId, View<Rend>>,
    pending_windows: Vec<WindowConfig<Rend>>,
}

impl<Rend: SurfaceRenderer> KioskApplication<Rend> {
    pub fn new() -> Self {
        KioskApplication {
            windows: HashMap::new(),
            pending_windows: Vec::new(),
        }
    }

    pub fn add_window(&mut self, window_config: WindowConfig<Rend>) {
        self.pending_windows.push(window_config);
    }

    fn window_mut_by_surface_id(&mut self, surface_id: usize) -> Option<&mut View<Rend>> {
        self.windows
            .values_mut()
            .find(|w| w.host.surface().id() == surface_id)
    }
}

impl<Rend: SurfaceRenderer> Default for KioskApplication<Rend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Rend: SurfaceRenderer> ApplicationHandler<KioskEvent> for KioskApplication<Rend> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Resume existing windows
        for (_, view) in self.windows.iter_mut() {
            view.resume();
        }

        // Initialise pending windows
        for window_config in self.pending_windows.drain(..) {
            let mut view = View::init(window_config, event_loop);
            view.resume();
            self.windows.insert(view.window_id(), view);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        for (_, view) in self.windows.iter_mut() {
            view.suspend();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        // Exit the app when window close is requested.
        if matches!(event, WindowEvent::CloseRequested) {
            // Drop window before exiting event loop
            // See https://github.com/rust-windowing/winit/issues/4135
            let window = self.windows.remove(&window_id);
            drop(window);
            if self.windows.is_empty() {
                event_loop.exit();
            }
            return;
        }

        if let Some(window) = self.windows.get_mut(&window_id) {
            window.handle_winit_event(event);
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: KioskEvent) {
        match event {
            KioskEvent::LoadOutcome {
                surface_id,
                outcome,
            } => {
                if let Some(window) = self.window_mut_by_surface_id(surface_id) {
                    window.handle_load_outcome(outcome);
                }
            }
        }
    }
}
