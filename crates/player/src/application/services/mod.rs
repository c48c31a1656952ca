//! Application services

mod session_router;
mod special_formatter;

pub use session_router::SessionEventRouter;
pub use special_formatter::format_special;
