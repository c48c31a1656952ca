//! Data types handed from the router to render surfaces.

mod log_entry;
mod markup;

pub use log_entry::{LogEntry, SpecialSender, SpecialTarget};
pub use markup::{field_html, log_line_tag, log_overflow};
