//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the router to update a view without depending on a concrete one.

pub mod render_surface;

pub use render_surface::RenderSurface;

#[cfg(any(test, feature = "testing"))]
pub use render_surface::MockRenderSurface;
