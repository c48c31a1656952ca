//! Slot to player name mapping for one socket session

use std::collections::HashMap;

use tenorite_domain::{PlayerName, SlotId};

/// Names announced by `playerjoin`, keyed by slot.
///
/// Created empty per connection and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: HashMap<SlotId, PlayerName>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or rename) the player in `slot`.
    pub fn register(&mut self, slot: SlotId, name: PlayerName) -> Option<PlayerName> {
        self.players.insert(slot, name)
    }

    pub fn name_of(&self, slot: &SlotId) -> Option<&PlayerName> {
        self.players.get(slot)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
