//! In-memory render surface

use std::collections::BTreeMap;

use tenorite_domain::{Field, PlayerName, SlotId};

use crate::application::dto::LogEntry;
use crate::application::state::EventLog;
use crate::ports::outbound::RenderSurface;

/// Keeps the latest field and name per slot plus the capped special log.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    fields: BTreeMap<SlotId, Field>,
    names: BTreeMap<SlotId, PlayerName>,
    log: EventLog,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, slot: &SlotId) -> Option<&Field> {
        self.fields.get(slot)
    }

    pub fn name(&self, slot: &SlotId) -> Option<&PlayerName> {
        self.names.get(slot)
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Log lines as plain text, oldest first.
    pub fn log_lines(&self) -> Vec<String> {
        self.log.iter().map(LogEntry::to_plain_text).collect()
    }
}

impl RenderSurface for MemorySurface {
    fn set_field(&mut self, slot: &SlotId, field: &Field) {
        self.fields.insert(slot.clone(), field.clone());
    }

    fn set_name(&mut self, slot: &SlotId, name: &PlayerName) {
        self.names.insert(slot.clone(), name.clone());
    }

    fn append_log_entry(&mut self, entry: LogEntry) {
        self.log.push(entry);
    }

    fn clear_slot(&mut self, slot: &SlotId) {
        self.fields.remove(slot);
        self.names.remove(slot);
    }
}
