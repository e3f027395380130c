use kiosk_traits::NavigationOutcome;

/// User events pumped through the winit event loop
#[derive(Debug, Clone)]
pub enum KioskEvent {
    /// A navigation attempt on a surface finished.
    ///
    /// Posted from fetch-completion threads via [`crate::KioskShellCallback`];
    /// handling it in `user_event` is what keeps outcome dispatch on the
    /// thread that owns the surface.
    LoadOutcome {
        surface_id: usize,
        outcome: NavigationOutcome,
    },
}
