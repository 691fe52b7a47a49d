//! Render boundary
//!
//! The simulation core never talks to a graphics API. It produces a
//! [`Frame`] (view + projection + draw list) once per tick and hands it to a
//! [`RenderSink`]; mesh geometry is generated once at startup by [`shapes`].
//! Backend construction and swapchain plumbing live entirely on the other
//! side of this seam.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Camera, DrawEntry, Frame, MeshId, build_frame};
pub use vertex::Vertex;

use thiserror::Error;

/// Failure kinds a backend may report when it is brought up
///
/// The core never constructs devices itself; hosts surface these from their
/// sink factories.
#[derive(Debug, Error)]
pub enum RenderBackendError {
    #[error("no suitable rendering device available")]
    DeviceUnavailable,

    #[error("backend rejected the requested configuration: {0}")]
    ConfigurationRejected(String),
}

/// Per-frame hand-off point to the renderer
///
/// Submission must be cheap and non-blocking; the backend may pipeline
/// internally.
pub trait RenderSink {
    fn submit(&mut self, frame: &Frame);
}
