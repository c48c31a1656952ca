//! Bounded special-event log

use std::collections::VecDeque;

use crate::application::dto::LogEntry;

/// Number of log lines a surface keeps visible.
pub const EVENT_LOG_CAPACITY: usize = 10;

/// FIFO of the most recent log entries.
///
/// The cap is enforced after every append, never before: pushing onto a
/// full log evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(EVENT_LOG_CAPACITY)
    }

    /// A log holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append an entry, returning how many old entries were evicted.
    pub fn push(&mut self, entry: LogEntry) -> usize {
        self.entries.push_back(entry);

        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}
