//! Application layer: session state, log formatting and frame dispatch.
//!
//! Nothing here touches a socket or a concrete render target; the router
//! talks to the outside world only through [`crate::ports::outbound::RenderSurface`].

pub mod dto;
pub mod services;
pub mod state;
