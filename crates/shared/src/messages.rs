//! Server message types for the spectator socket
//!
//! | kind         | tokens                          |
//! |--------------|---------------------------------|
//! | `f`          | slot, field string              |
//! | `sb`         | target slot, code, sender slot  |
//! | `playerjoin` | slot, name                      |
//! | `playerleave`| slot                            |
//! | `endgame`    | -                               |

use serde::Serialize;
use thiserror::Error;

use tenorite_domain::{Field, PlayerName, SlotId};

use crate::frame::tokenize;

/// Wire tags, token 0 of every frame.
pub mod kinds {
    pub const FIELD: &str = "f";
    pub const SPECIAL: &str = "sb";
    pub const PLAYER_JOIN: &str = "playerjoin";
    pub const PLAYER_LEAVE: &str = "playerleave";
    pub const END_GAME: &str = "endgame";
}

/// Frame that has a known kind but cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A required positional token is missing
    #[error("'{kind}' frame is missing its {field} token")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

impl ProtocolError {
    fn missing(kind: &'static str, field: &'static str) -> Self {
        Self::MissingField { kind, field }
    }
}

/// Messages from the game server to a spectator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Full field snapshot for one slot
    Field { slot: SlotId, field: Field },

    /// A special was used (or lines were added to everybody)
    ///
    /// `action` stays a raw code: codes outside the known table are dropped
    /// by the consumer, not by the decoder.
    SpecialUsed {
        target: SlotId,
        action: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        sender: Option<SlotId>,
    },

    /// A player took a slot
    PlayerJoin { slot: SlotId, name: PlayerName },

    /// A player left their slot
    PlayerLeave { slot: SlotId },

    /// The game is over
    EndGame,

    /// Kind not understood by this client
    ///
    /// Kept as a variant so new kinds never fail decoding.
    Unknown { kind: String },
}

impl ServerMessage {
    /// Decode a single text frame.
    ///
    /// Unknown kinds are not errors. Missing positional tokens are; extra
    /// tokens are ignored.
    pub fn parse(frame: &str) -> Result<Self, ProtocolError> {
        let tokens = tokenize(frame);
        let kind = tokens.first().copied().unwrap_or_default();
        let arg = |index: usize| tokens.get(index).copied();

        let msg = match kind {
            kinds::FIELD => ServerMessage::Field {
                slot: arg(1)
                    .map(SlotId::from)
                    .ok_or_else(|| ProtocolError::missing(kinds::FIELD, "slot"))?,
                field: arg(2)
                    .map(Field::decode)
                    .ok_or_else(|| ProtocolError::missing(kinds::FIELD, "field"))?,
            },
            kinds::SPECIAL => ServerMessage::SpecialUsed {
                target: arg(1)
                    .map(SlotId::from)
                    .ok_or_else(|| ProtocolError::missing(kinds::SPECIAL, "target"))?,
                action: arg(2)
                    .map(str::to_string)
                    .ok_or_else(|| ProtocolError::missing(kinds::SPECIAL, "action"))?,
                sender: arg(3).map(SlotId::from),
            },
            kinds::PLAYER_JOIN => ServerMessage::PlayerJoin {
                slot: arg(1)
                    .map(SlotId::from)
                    .ok_or_else(|| ProtocolError::missing(kinds::PLAYER_JOIN, "slot"))?,
                name: arg(2)
                    .map(PlayerName::from)
                    .ok_or_else(|| ProtocolError::missing(kinds::PLAYER_JOIN, "name"))?,
            },
            kinds::PLAYER_LEAVE => ServerMessage::PlayerLeave {
                slot: arg(1)
                    .map(SlotId::from)
                    .ok_or_else(|| ProtocolError::missing(kinds::PLAYER_LEAVE, "slot"))?,
            },
            kinds::END_GAME => ServerMessage::EndGame,
            other => ServerMessage::Unknown {
                kind: other.to_string(),
            },
        };

        Ok(msg)
    }

    /// Wire tag of this message.
    pub fn kind(&self) -> &str {
        match self {
            ServerMessage::Field { .. } => kinds::FIELD,
            ServerMessage::SpecialUsed { .. } => kinds::SPECIAL,
            ServerMessage::PlayerJoin { .. } => kinds::PLAYER_JOIN,
            ServerMessage::PlayerLeave { .. } => kinds::PLAYER_LEAVE,
            ServerMessage::EndGame => kinds::END_GAME,
            ServerMessage::Unknown { kind } => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenorite_domain::Tile;

    #[test]
    fn test_parse_field() {
        let msg = ServerMessage::parse("f 2 01S9").expect("decodes");
        match msg {
            ServerMessage::Field { slot, field } => {
                assert_eq!(slot, SlotId::from("2"));
                assert_eq!(
                    field.tiles(),
                    &[
                        Tile::Numbered(0),
                        Tile::Numbered(1),
                        Tile::Special('S'),
                        Tile::Numbered(9)
                    ]
                );
            }
            other => panic!("Expected Field message, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_special_keeps_raw_code_and_sender() {
        let msg = ServerMessage::parse("sb 3 zz 1").expect("decodes");
        assert_eq!(
            msg,
            ServerMessage::SpecialUsed {
                target: SlotId::from("3"),
                action: "zz".to_string(),
                sender: Some(SlotId::from("1")),
            }
        );
    }

    #[test]
    fn test_parse_special_without_sender() {
        let msg = ServerMessage::parse("sb 0 cs2").expect("decodes");
        match msg {
            ServerMessage::SpecialUsed { sender, .. } => assert_eq!(sender, None),
            other => panic!("Expected SpecialUsed message, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_player_join_and_leave() {
        assert_eq!(
            ServerMessage::parse("playerjoin 3 Alice").expect("decodes"),
            ServerMessage::PlayerJoin {
                slot: SlotId::from("3"),
                name: PlayerName::from("Alice"),
            }
        );
        assert_eq!(
            ServerMessage::parse("playerleave 2").expect("decodes"),
            ServerMessage::PlayerLeave {
                slot: SlotId::from("2")
            }
        );
    }

    #[test]
    fn test_parse_endgame_ignores_extra_tokens() {
        assert_eq!(
            ServerMessage::parse("endgame now please").expect("decodes"),
            ServerMessage::EndGame
        );
    }

    #[test]
    fn test_unknown_kind_is_not_an_error() {
        assert_eq!(
            ServerMessage::parse("lvl 1 12").expect("decodes"),
            ServerMessage::Unknown {
                kind: "lvl".to_string()
            }
        );
        assert_eq!(
            ServerMessage::parse("").expect("decodes"),
            ServerMessage::Unknown {
                kind: String::new()
            }
        );
    }

    #[test]
    fn test_leading_whitespace_makes_kind_empty() {
        let msg = ServerMessage::parse(" endgame").expect("decodes");
        assert_eq!(msg.kind(), "");
    }

    #[test]
    fn test_trailing_whitespace_gives_empty_field() {
        match ServerMessage::parse("f 4 ").expect("decodes") {
            ServerMessage::Field { field, .. } => assert!(field.is_empty()),
            other => panic!("Expected Field message, got {:?}", other),
        }
    }

    #[test]
    fn test_tab_ends_field_string() {
        match ServerMessage::parse("f 1 0\t1").expect("decodes") {
            ServerMessage::Field { field, .. } => {
                assert_eq!(field.tiles(), &[Tile::Numbered(0)]);
            }
            other => panic!("Expected Field message, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_frame_is_unknown() {
        assert_eq!(
            ServerMessage::parse("   ").expect("decodes"),
            ServerMessage::Unknown {
                kind: String::new()
            }
        );
    }

    #[test]
    fn test_missing_tokens() {
        assert_eq!(
            ServerMessage::parse("f 2"),
            Err(ProtocolError::MissingField {
                kind: "f",
                field: "field"
            })
        );
        assert_eq!(
            ServerMessage::parse("sb 2"),
            Err(ProtocolError::MissingField {
                kind: "sb",
                field: "action"
            })
        );
        assert!(ServerMessage::parse("playerjoin 1").is_err());
        assert!(ServerMessage::parse("playerleave").is_err());
    }

    #[test]
    fn test_kind_matches_wire_tag() {
        for frame in ["f 1 0", "sb 1 a 2", "playerjoin 1 x", "playerleave 1", "endgame"] {
            let msg = ServerMessage::parse(frame).expect("decodes");
            assert!(frame.starts_with(msg.kind()));
        }
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let msg = ServerMessage::parse("playerleave 5").expect("decodes");
        let json = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(json["type"], "PlayerLeave");
        assert_eq!(json["slot"], "5");
    }
}
