//! The session aggregate: players, tricks, and the `GameSession` document.
//!
//! One `GameSession` is the single source of truth for a table. Everything
//! embedded in it (players, tricks) is an owned value type; cards are
//! referenced by their stable id, never by identity.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cards_types::{Card, CardColor};

/// Session lifecycle status.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Lobby: players may join and leave freely.
    Waiting,
    /// A wizard was flipped as trump; the host must pick a color.
    SelectingTrump,
    /// Bidding and trick play.
    InProgress,
    /// All rounds played; terminal.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub user_id: Uuid,
    pub username: String,
    pub hand: Vec<Card>,
    pub bid: Option<u8>,
    pub score: i32,
    pub tricks_won: u8,
}

impl Player {
    pub fn new(user_id: Uuid, username: String) -> Self {
        Self {
            user_id,
            username,
            hand: Vec::new(),
            bid: None,
            score: 0,
            tricks_won: 0,
        }
    }
}

/// One card played into the current trick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrickPlay {
    pub player_id: Uuid,
    pub username: String,
    pub card: Card,
}

/// A resolved trick of the current round, kept for display purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub cards: Vec<TrickPlay>,
    pub winner_id: Uuid,
    pub winner_username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: Uuid,
    /// Six-character room code, stored uppercase, matched case-insensitively.
    pub code: String,
    pub status: GameStatus,
    pub host_id: Uuid,
    /// Seat order; index 0..N-1 is the turn order.
    pub players: Vec<Player>,
    /// 1-based round number; also the hand size for the round.
    pub round: u8,
    /// Fixed at game start from the player count.
    pub total_rounds: u8,
    /// Cards remaining undealt after hands and the trump flip.
    pub deck: Vec<Card>,
    pub trump_card: Option<Card>,
    pub trump_color: Option<CardColor>,
    pub current_player_index: usize,
    pub current_trick: Vec<TrickPlay>,
    pub completed_tricks: Vec<CompletedTrick>,
    /// Base seed for per-round deal derivation. Never serialized: clients
    /// holding it could predict every future deal.
    #[serde(skip)]
    pub rng_seed: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl GameSession {
    /// Fresh lobby session with the host as its only player.
    pub fn new(host_id: Uuid, host_username: String, code: String, rng_seed: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            status: GameStatus::Waiting,
            host_id,
            players: vec![Player::new(host_id, host_username)],
            round: 1,
            total_rounds: 0,
            deck: Vec::new(),
            trump_card: None,
            trump_color: None,
            current_player_index: 0,
            current_trick: Vec::new(),
            completed_tricks: Vec::new(),
            rng_seed,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn is_host(&self, user_id: Uuid) -> bool {
        self.host_id == user_id
    }

    pub fn player_index(&self, user_id: Uuid) -> Option<usize> {
        self.players.iter().position(|p| p.user_id == user_id)
    }

    pub fn player(&self, user_id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.user_id == user_id)
    }

    /// Player whose turn it is, if the index is valid.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Bidding for the round is complete once every player has a bid.
    pub fn bidding_complete(&self) -> bool {
        self.players.iter().all(|p| p.bid.is_some())
    }

    /// All hands empty means the round's tricks are all played.
    pub fn hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty())
    }

    /// Cards already played into current or completed tricks this round.
    pub fn cards_played_this_round(&self) -> usize {
        self.current_trick.len()
            + self
                .completed_tricks
                .iter()
                .map(|t| t.cards.len())
                .sum::<usize>()
    }
}
