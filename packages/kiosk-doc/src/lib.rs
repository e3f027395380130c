//! The fetch-backed render surface for Kiosk
//!
//! Provides [`DocumentSurface`], an implementation of the
//! [`kiosk_traits::RenderSurface`] trait that retrieves remote documents
//! through a [`kiosk_traits::DocumentFetcher`] and serves a bundled offline
//! document from a fixed application-internal URL.

mod document_surface;
pub use document_surface::{DocumentSurface, DocumentSurfaceConfig};

/// Fixed URL of the bundled offline document.
///
/// Navigating a [`DocumentSurface`] here always succeeds: the document is
/// embedded in the binary rather than read from disk, so there is no missing
/// asset to fail on.
pub const OFFLINE_DOCUMENT_URL: &str = "kiosk://assets/offline.html";
