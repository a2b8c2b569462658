//! Notification events and the sink they are published to.
//!
//! The engine treats notification delivery as fire-and-forget: `publish`
//! cannot fail an operation, and nothing waits for acknowledgment. A state
//! mutation is committed to the store before its event goes out.

pub mod hub;

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{CardColor, GameSession, GameStatus, Player};

pub use hub::BroadcastHub;

/// Where an event is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Every connected client.
    Global,
    /// Clients browsing the lobby.
    Lobby,
    /// Clients subscribed to one session.
    Game(Uuid),
}

impl Topic {
    pub fn channel(&self) -> String {
        match self {
            Topic::Global => "global".to_string(),
            Topic::Lobby => "lobby".to_string(),
            Topic::Game(id) => format!("game:{id}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub id: Uuid,
    pub code: String,
    pub players: Vec<Player>,
    pub host_id: Uuid,
}

impl From<&GameSession> for GameSummary {
    fn from(session: &GameSession) -> Self {
        Self {
            id: session.id,
            code: session.code.clone(),
            players: session.players.clone(),
            host_id: session.host_id,
        }
    }
}

/// One notification event with its minimal payload.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    UserLoggedIn { user: UserSummary },
    GameCreated { game: GameSummary },
    PlayerJoined { players: Vec<Player> },
    PlayerLeft { players: Vec<Player>, user_id: Uuid },
    GameDeleted { reason: String },
    GameStarted { room_code: String, status: GameStatus },
    TrumpSelected { trump_color: CardColor },
    GameUpdated { game: GameSession },
    GameFinished { game: GameSession },
}

impl GameEvent {
    /// Event name as broadcast to clients, e.g. `player_joined`.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::UserLoggedIn { .. } => "user_logged_in",
            GameEvent::GameCreated { .. } => "game_created",
            GameEvent::PlayerJoined { .. } => "player_joined",
            GameEvent::PlayerLeft { .. } => "player_left",
            GameEvent::GameDeleted { .. } => "game_deleted",
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::TrumpSelected { .. } => "trump_selected",
            GameEvent::GameUpdated { .. } => "game_updated",
            GameEvent::GameFinished { .. } => "game_finished",
        }
    }
}

/// Sink for state-change events.
///
/// Implementations must be best-effort: log and swallow delivery failures,
/// never block session progress.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, topic: Topic, event: GameEvent);
}
