//! RenderSurface - where the router puts what it decoded
//!
//! Targets are addressed by slot (`field{slot}`, `name{slot}`) plus one
//! shared special log. Implementations must not fail: a surface that cannot
//! draw something logs it and carries on.

use tenorite_domain::{Field, PlayerName, SlotId};

use crate::application::dto::LogEntry;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RenderSurface {
    /// Replace everything shown for `slot`'s field.
    fn set_field(&mut self, slot: &SlotId, field: &Field);

    /// Show `name` as the label for `slot`.
    fn set_name(&mut self, slot: &SlotId, name: &PlayerName);

    /// Append to the special log, evicting the oldest lines past the cap.
    fn append_log_entry(&mut self, entry: LogEntry);

    /// Blank both the name and the field of `slot`.
    fn clear_slot(&mut self, slot: &SlotId);
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn set_field(&mut self, slot: &SlotId, field: &Field) {
        (**self).set_field(slot, field)
    }

    fn set_name(&mut self, slot: &SlotId, name: &PlayerName) {
        (**self).set_name(slot, name)
    }

    fn append_log_entry(&mut self, entry: LogEntry) {
        (**self).append_log_entry(entry)
    }

    fn clear_slot(&mut self, slot: &SlotId) {
        (**self).clear_slot(slot)
    }
}
