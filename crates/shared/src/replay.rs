//! Replay socket addressing

/// Path of the replay socket on the game server.
pub const REPLAY_PATH: &str = "/ws/replay";

/// Query parameter carrying the [`tenorite_domain::Tempo`].
pub const REPLAY_TEMPO_PARAM: &str = "tempo";

/// Query parameter carrying the [`tenorite_domain::GameId`].
pub const REPLAY_GAME_ID_PARAM: &str = "id";
