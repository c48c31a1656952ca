//! Ports - the interfaces the application layer depends on

pub mod outbound;
