use std::num::NonZero;
use std::sync::Arc;

use kiosk_traits::RenderSurface;
use softbuffer::{Context, Surface};
use winit::window::Window;

/// Presents a render surface into a winit window.
///
/// The document renderer proper is an external collaborator; the shell only
/// needs these lifecycle entry points to drive one. [`SoftbufferRenderer`] is
/// the built-in implementation.
pub trait SurfaceRenderer {
    fn is_active(&self) -> bool;
    fn resume(&mut self, window: Arc<Window>, width: u32, height: u32);
    fn suspend(&mut self);
    fn set_size(&mut self, physical_width: u32, physical_height: u32);
    fn render(&mut self, surface: &dyn RenderSurface);
}

struct ActiveRenderState {
    _context: Context<Arc<Window>>,
    surface: Surface<Arc<Window>, Arc<Window>>,
}

enum RenderState {
    Active(ActiveRenderState),
    Suspended,
}

/// CPU presenter that clears the window to the surface's backdrop color
pub struct SoftbufferRenderer {
    // The fields MUST be in this order, so that the surface is dropped before the window.
    // The window is cached even when suspended so that it can be reused on resume.
    render_state: RenderState,
    window: Option<Arc<Window>>,
}

impl SoftbufferRenderer {
    pub fn new() -> Self {
        Self {
            render_state: RenderState::Suspended,
            window: None,
        }
    }
}

impl Default for SoftbufferRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceRenderer for SoftbufferRenderer {
    fn is_active(&self) -> bool {
        matches!(self.render_state, RenderState::Active(_))
    }

    fn resume(&mut self, window: Arc<Window>, width: u32, height: u32) {
        let context = Context::new(window.clone()).unwrap();
        let surface = Surface::new(&context, window.clone()).unwrap();
        self.render_state = RenderState::Active(ActiveRenderState {
            _context: context,
            surface,
        });
        self.window = Some(window);

        self.set_size(width, height);
    }

    fn suspend(&mut self) {
        self.render_state = RenderState::Suspended;
    }

    fn set_size(&mut self, physical_width: u32, physical_height: u32) {
        if let RenderState::Active(state) = &mut self.render_state {
            state
                .surface
                .resize(
                    NonZero::new(physical_width.max(1)).unwrap(),
                    NonZero::new(physical_height.max(1)).unwrap(),
                )
                .unwrap();
        }
    }

    fn render(&mut self, surface: &dyn RenderSurface) {
        let RenderState::Active(state) = &mut self.render_state else {
            return;
        };

        let Ok(mut surface_buffer) = state.surface.buffer_mut() else {
            return;
        };

        surface_buffer.fill(surface.background_color());
        surface_buffer.present().unwrap();
    }
}
