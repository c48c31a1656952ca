//! Session event router
//!
//! Top level dispatch over incoming frames. One frame is decoded, applied to
//! the registry and pushed to the surface before the next one is looked at;
//! there is no buffering or reordering here.

use tenorite_shared::ServerMessage;

use crate::application::dto::LogEntry;
use crate::application::services::format_special;
use crate::application::state::PlayerRegistry;
use crate::ports::outbound::RenderSurface;

/// Routes decoded server messages to a render surface.
///
/// Owns the per-connection [`PlayerRegistry`]; build one router per socket
/// and drop it (or take it apart with [`into_parts`](Self::into_parts))
/// when the socket is gone.
pub struct SessionEventRouter<S> {
    registry: PlayerRegistry,
    surface: S,
}

impl<S: RenderSurface> SessionEventRouter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            registry: PlayerRegistry::new(),
            surface,
        }
    }

    /// Decode and apply one raw text frame.
    ///
    /// Malformed frames are logged and dropped; they never reach the surface.
    pub fn handle_frame(&mut self, frame: &str) {
        tracing::debug!(frame, "Received frame");

        match ServerMessage::parse(frame) {
            Ok(message) => self.handle_message(message),
            Err(e) => tracing::debug!(error = %e, "Dropping malformed frame"),
        }
    }

    /// Apply one decoded message.
    pub fn handle_message(&mut self, message: ServerMessage) {
        if tracing::enabled!(tracing::Level::TRACE) {
            if let Ok(json) = serde_json::to_string(&message) {
                tracing::trace!(message = %json, "Dispatching message");
            }
        }

        match message {
            ServerMessage::Field { slot, field } => {
                self.surface.set_field(&slot, &field);
            }
            ServerMessage::SpecialUsed {
                target,
                action,
                sender,
            } => match format_special(&self.registry, &target, &action, sender.as_ref()) {
                Some(entry) => self.surface.append_log_entry(entry),
                None => tracing::trace!(code = %action, "Ignoring unknown special code"),
            },
            ServerMessage::PlayerJoin { slot, name } => {
                self.surface.set_name(&slot, &name);
                self.registry.register(slot, name);
            }
            ServerMessage::PlayerLeave { slot } => {
                // The registry entry is kept: later specials still resolve the name.
                self.surface.clear_slot(&slot);
            }
            ServerMessage::EndGame => {
                self.surface.append_log_entry(LogEntry::GameEnded);
            }
            ServerMessage::Unknown { kind } => {
                tracing::trace!(kind = %kind, "Ignoring unknown message kind");
            }
        }
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tear down, handing back the session state and the surface.
    pub fn into_parts(self) -> (PlayerRegistry, S) {
        (self.registry, self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{SpecialSender, SpecialTarget};
    use crate::ports::outbound::MockRenderSurface;
    use mockall::predicate::{always, eq};
    use mockall::Sequence;
    use tenorite_domain::{Field, PlayerName, SlotId, SpecialAction, Tile};

    #[test]
    fn test_field_frame_renders_tiles_in_order() {
        let mut surface = MockRenderSurface::new();
        surface
            .expect_set_field()
            .with(eq(SlotId::from("2")), always())
            .times(1)
            .returning(|_, field| {
                assert_eq!(
                    field.tiles(),
                    &[
                        Tile::Numbered(0),
                        Tile::Numbered(1),
                        Tile::Special('S'),
                        Tile::Numbered(9)
                    ]
                );
            });

        let mut router = SessionEventRouter::new(surface);
        router.handle_frame("f 2 01S9");
    }

    #[test]
    fn test_join_then_special_from_unregistered_sender() {
        let mut seq = Sequence::new();
        let mut surface = MockRenderSurface::new();
        surface
            .expect_set_name()
            .with(eq(SlotId::from("3")), eq(PlayerName::from("Alice")))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_append_log_entry()
            .with(eq(LogEntry::Special {
                action: SpecialAction::AddLine,
                target: SpecialTarget::Player(PlayerName::from("Alice")),
                sender: SpecialSender::Server,
            }))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|entry| assert_eq!(entry.to_plain_text(), "Add Line on Alice by server"));

        let mut router = SessionEventRouter::new(surface);
        router.handle_frame("playerjoin 3 Alice");
        router.handle_frame("sb 3 a 1");

        assert_eq!(
            router.registry().name_of(&SlotId::from("3")),
            Some(&PlayerName::from("Alice"))
        );
    }

    #[test]
    fn test_unknown_special_code_touches_nothing() {
        let mut surface = MockRenderSurface::new();
        surface.expect_set_name().times(1).return_const(());
        surface.expect_append_log_entry().never();

        let mut router = SessionEventRouter::new(surface);
        router.handle_frame("playerjoin 1 nick");
        router.handle_frame("sb 1 x 1");

        assert_eq!(router.registry().len(), 1);
    }

    #[test]
    fn test_player_leave_clears_only_that_slot() {
        let mut surface = MockRenderSurface::new();
        surface
            .expect_clear_slot()
            .with(eq(SlotId::from("2")))
            .times(1)
            .return_const(());
        surface.expect_set_field().never();
        surface.expect_set_name().never();

        let mut router = SessionEventRouter::new(surface);
        router.handle_frame("playerleave 2");
    }

    #[test]
    fn test_player_leave_keeps_registry_entry() {
        let mut surface = MockRenderSurface::new();
        surface.expect_set_name().return_const(());
        surface.expect_clear_slot().return_const(());
        surface
            .expect_append_log_entry()
            .times(1)
            .returning(|entry| assert_eq!(entry.to_plain_text(), "Gravity on jane by server"));

        let mut router = SessionEventRouter::new(surface);
        router.handle_frame("playerjoin 2 jane");
        router.handle_frame("playerleave 2");
        router.handle_frame("sb 2 g 0");
    }

    #[test]
    fn test_endgame_appends_fixed_record() {
        let mut surface = MockRenderSurface::new();
        surface
            .expect_append_log_entry()
            .with(eq(LogEntry::GameEnded))
            .times(1)
            .return_const(());

        let mut router = SessionEventRouter::new(surface);
        router.handle_frame("endgame");
    }

    #[test]
    fn test_unknown_and_malformed_frames_are_ignored() {
        let mut surface = MockRenderSurface::new();
        surface.expect_set_field().never();
        surface.expect_set_name().never();
        surface.expect_append_log_entry().never();
        surface.expect_clear_slot().never();

        let mut router = SessionEventRouter::new(surface);
        for frame in ["", "   ", "lvl 1 10", "f 2", "sb", "playerjoin 4", "playerleave", " endgame"] {
            router.handle_frame(frame);
        }
        assert!(router.registry().is_empty());
    }

    #[test]
    fn test_handle_message_accepts_decoded_messages() {
        let mut surface = MockRenderSurface::new();
        surface
            .expect_set_field()
            .withf(|slot, field| slot.as_str() == "1" && field.is_empty())
            .times(1)
            .return_const(());

        let mut router = SessionEventRouter::new(surface);
        router.handle_message(ServerMessage::Field {
            slot: SlotId::from("1"),
            field: Field::default(),
        });
    }
}
