//! DOM render surface (WASM)
//!
//! Targets the spectator page markup: `#field{slot}`, `#name{slot}` and a
//! shared `#specials` list. Missing elements are skipped with a warning.

use tenorite_domain::{Field, PlayerName, SlotId};
use web_sys::{Document, Element};

use crate::application::dto::{field_html, log_line_tag, log_overflow, LogEntry};
use crate::ports::outbound::RenderSurface;

const FIELD_PREFIX: &str = "field";
const NAME_PREFIX: &str = "name";
const SPECIALS_ID: &str = "specials";

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Surface over the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            tracing::warn!(id, "Render target not found");
        }
        element
    }
}

impl RenderSurface for DomSurface {
    fn set_field(&mut self, slot: &SlotId, field: &Field) {
        if let Some(target) = self.element(&format!("{}{}", FIELD_PREFIX, slot)) {
            target.set_inner_html(&field_html(field));
        }
    }

    fn set_name(&mut self, slot: &SlotId, name: &PlayerName) {
        if let Some(target) = self.element(&format!("{}{}", NAME_PREFIX, slot)) {
            target.set_text_content(Some(name.as_str()));
        }
    }

    fn append_log_entry(&mut self, entry: LogEntry) {
        let Some(specials) = self.element(SPECIALS_ID) else {
            return;
        };

        let line = match self.document.create_element(log_line_tag(&entry)) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Failed to create log line: {:?}", e);
                return;
            }
        };
        line.set_inner_html(&entry.to_html());

        if let Err(e) = specials.append_child(&line) {
            tracing::warn!("Failed to append log line: {:?}", e);
            return;
        }

        for _ in 0..log_overflow(specials.child_element_count() as usize) {
            match specials.first_element_child() {
                Some(oldest) => oldest.remove(),
                None => break,
            }
        }
    }

    fn clear_slot(&mut self, slot: &SlotId) {
        if let Some(target) = self.element(&format!("{}{}", NAME_PREFIX, slot)) {
            target.set_inner_html("");
        }
        if let Some(target) = self.element(&format!("{}{}", FIELD_PREFIX, slot)) {
            target.set_inner_html("");
        }
    }
}
