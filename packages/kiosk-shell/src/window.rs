use std::sync::Arc;

use kiosk_traits::NavigationOutcome;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::host::SurfaceHost;
use crate::renderer::SurfaceRenderer;

pub struct WindowConfig<Rend: SurfaceRenderer> {
    host: SurfaceHost,
    attributes: WindowAttributes,
    renderer: Rend,
}

impl<Rend: SurfaceRenderer> WindowConfig<Rend> {
    pub fn new(host: SurfaceHost, renderer: Rend) -> Self {
        Self::with_attributes(host, renderer, Window::default_attributes())
    }

    pub fn with_attributes(
        host: SurfaceHost,
        renderer: Rend,
        attributes: WindowAttributes,
    ) -> Self {
        WindowConfig {
            host,
            attributes,
            renderer,
        }
    }
}

pub struct View<Rend: SurfaceRenderer> {
    pub host: SurfaceHost,
    pub renderer: Rend,
    pub window: Arc<Window>,
    pub is_visible: bool,
}

impl<Rend: SurfaceRenderer> View<Rend> {
    pub fn init(config: WindowConfig<Rend>, event_loop: &ActiveEventLoop) -> Self {
        let winit_window = Arc::from(event_loop.create_window(config.attributes).unwrap());

        Self {
            host: config.host,
            renderer: config.renderer,
            is_visible: winit_window.is_visible().unwrap_or(true),
            window: winit_window,
        }
    }

    /// The foreground-visible transition: bring up presentation, then let the
    /// host re-arm its surface
    pub fn resume(&mut self) {
        let size = self.window.inner_size();
        self.renderer
            .resume(self.window.clone(), size.width, size.height);
        if !self.renderer.is_active() {
            panic!("Renderer failed to resume");
        }

        self.host.resume();
        self.request_redraw();
    }

    pub fn suspend(&mut self) {
        self.renderer.suspend();
    }

    pub fn request_redraw(&self) {
        if self.renderer.is_active() {
            self.window.request_redraw();
        }
    }

    pub fn redraw(&mut self) {
        self.renderer.render(self.host.surface());
    }

    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    pub fn handle_load_outcome(&mut self, outcome: NavigationOutcome) {
        self.host.handle_outcome(outcome);
        self.request_redraw();
    }

    pub fn handle_winit_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                // Handled at the application level
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            WindowEvent::Occluded(is_occluded) => {
                self.is_visible = !is_occluded;
                if self.is_visible {
                    self.request_redraw();
                }
            }
            WindowEvent::Resized(physical_size) => {
                self.renderer
                    .set_size(physical_size.width, physical_size.height);
                self.request_redraw();
            }
            _ => {}
        }
    }
}
