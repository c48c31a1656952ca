//! Text render surface
//!
//! Prints every update as it happens. Fields are drawn as rows of glyphs
//! (`.` for an empty cell, the digit for a coloured one, the letter for a
//! special). Write failures are logged and otherwise ignored.

use std::collections::HashMap;
use std::io::{self, Write};

use tenorite_domain::{Field, PlayerName, SlotId};

use crate::application::dto::LogEntry;
use crate::application::state::EventLog;
use crate::ports::outbound::RenderSurface;

/// Standard field width in cells.
pub const DEFAULT_FIELD_WIDTH: usize = 12;

pub struct ConsoleSurface<W: Write> {
    out: W,
    field_width: usize,
    names: HashMap<SlotId, PlayerName>,
    log: EventLog,
}

impl ConsoleSurface<io::Stdout> {
    pub fn stdout(field_width: usize) -> Self {
        Self::new(io::stdout(), field_width)
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W, field_width: usize) -> Self {
        Self {
            out,
            field_width: field_width.max(1),
            names: HashMap::new(),
            log: EventLog::new(),
        }
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&self, slot: &SlotId) -> String {
        match self.names.get(slot) {
            Some(name) => format!("[{}] {}", slot, name),
            None => format!("[{}]", slot),
        }
    }

    fn write_field(&mut self, slot: &SlotId, field: &Field) -> io::Result<()> {
        let heading = self.heading(slot);
        writeln!(self.out, "{}", heading)?;
        for row in field.rows(self.field_width) {
            let line: String = row.iter().map(|tile| tile.glyph()).collect();
            writeln!(self.out, "  {}", line)?;
        }
        self.out.flush()
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    fn report(result: io::Result<()>) {
        if let Err(e) = result {
            tracing::warn!("Failed to write to console surface: {}", e);
        }
    }
}

impl<W: Write> RenderSurface for ConsoleSurface<W> {
    fn set_field(&mut self, slot: &SlotId, field: &Field) {
        let result = self.write_field(slot, field);
        Self::report(result);
    }

    fn set_name(&mut self, slot: &SlotId, name: &PlayerName) {
        self.names.insert(slot.clone(), name.clone());
        let result = self.write_line(&format!("{} joined slot {}", name, slot));
        Self::report(result);
    }

    fn append_log_entry(&mut self, entry: LogEntry) {
        let line = format!("* {}", entry);
        let evicted = self.log.push(entry);
        if evicted > 0 {
            tracing::trace!(evicted, "Special log trimmed");
        }
        let result = self.write_line(&line);
        Self::report(result);
    }

    fn clear_slot(&mut self, slot: &SlotId) {
        let heading = self.heading(slot);
        self.names.remove(slot);
        let result = self.write_line(&format!("{} left", heading));
        Self::report(result);
    }
}
