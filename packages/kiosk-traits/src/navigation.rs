//! Navigation outcomes and the error taxonomy reported by a render surface

use std::sync::Arc;

use thiserror::Error;
use url::Url;

use crate::RenderSurface;

/// Classified cause of a failed navigation, with the numeric code the
/// platform web-view convention assigns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    /// Generic failure (code `-1`)
    Unknown,
    /// Host name could not be resolved (code `-2`)
    HostLookup,
    /// Connection could not be established (code `-6`)
    Connect,
    /// The transfer was interrupted (code `-7`)
    Io,
    /// The request timed out (code `-8`)
    Timeout,
}

impl LoadErrorKind {
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::HostLookup => -2,
            Self::Connect => -6,
            Self::Io => -7,
            Self::Timeout => -8,
        }
    }

    /// Canonical description string for this kind
    pub fn description(self) -> &'static str {
        match self {
            Self::Unknown => "net::ERR_FAILED",
            Self::HostLookup => "net::ERR_NAME_NOT_RESOLVED",
            Self::Connect => "net::ERR_CONNECTION_REFUSED",
            Self::Io => "net::ERR_CONNECTION_ABORTED",
            Self::Timeout => "net::ERR_TIMED_OUT",
        }
    }
}

/// A failed navigation as reported by the render surface: the classified
/// kind, a human-readable description, and the URL that failed to load.
#[derive(Debug, Clone, Error)]
#[error("{description} ({url})")]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub description: String,
    pub url: Url,
}

impl LoadError {
    /// A [`LoadError`] with the canonical description for its kind
    pub fn new(kind: LoadErrorKind, url: Url) -> Self {
        Self {
            kind,
            description: kind.description().to_string(),
            url,
        }
    }

    /// Override the canonical description with a more specific one
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn code(&self) -> i32 {
        self.kind.code()
    }
}

/// The signal a render surface reports after each navigation attempt.
///
/// Not persisted anywhere: delivered once to the shell, which reacts and
/// drops it.
#[derive(Debug, Clone)]
pub enum NavigationOutcome {
    /// A document was retrieved and the surface now holds it. `url` is the
    /// final URL after any redirects.
    Loaded { url: Url },
    /// The navigation failed before a document could be retrieved
    Failed(LoadError),
}

/// An abstraction to allow shells to hook into navigation failures reported
/// by a render surface.
///
/// Dispatch is guaranteed to happen on the thread that owns the surface, so
/// implementations need no internal synchronization.
pub trait LoadErrorHandler: Send + Sync + 'static {
    fn on_load_error(&self, surface: &dyn RenderSurface, error: &LoadError);
}

pub type SharedLoadErrorHandler = Arc<dyn LoadErrorHandler>;

pub struct DummyLoadErrorHandler;

impl LoadErrorHandler for DummyLoadErrorHandler {
    fn on_load_error(&self, _surface: &dyn RenderSurface, _error: &LoadError) {
        // Default impl: do nothing
    }
}
