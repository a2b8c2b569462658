//! Session operations: the engine behind every client action.
//!
//! Each mutating operation runs the same bracket: take the session's lock,
//! load, validate and apply the change through the domain layer, persist,
//! then publish exactly one event. The lock serializes mutations per session
//! id; publishing happens after the store write and is best-effort.

use std::sync::Arc;

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::domain::state::{GameSession, GameStatus, Player};
use crate::domain::tricks::PlayCardOutcome;
use crate::domain::{bidding, dealing, rules, tricks, CardColor};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::notify::{GameEvent, GameSummary, Notifier, Topic};
use crate::store::{SessionLocks, SessionStore};
use crate::utils::room_code::generate_room_code;

/// How a leave request resolved.
#[derive(Debug, Clone)]
pub enum LeaveOutcome {
    /// The whole session was torn down.
    Deleted { reason: String },
    /// Only the leaving player was removed.
    Left(GameSession),
}

pub struct GameFlowService {
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    locks: SessionLocks,
}

impl GameFlowService {
    pub fn new(store: Arc<dyn SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            locks: SessionLocks::new(),
        }
    }

    async fn require_session(&self, id: Uuid) -> Result<GameSession, DomainError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, "Game not found"))
    }

    async fn unique_room_code(&self) -> Result<String, DomainError> {
        loop {
            let code = generate_room_code();
            if !self.store.code_in_use(&code).await? {
                return Ok(code);
            }
        }
    }

    /// Create a session with the caller as host and sole player.
    pub async fn create_game(
        &self,
        user_id: Uuid,
        username: String,
    ) -> Result<GameSession, DomainError> {
        let code = self.unique_room_code().await?;
        let rng_seed: i64 = rand::rng().random();
        let session = GameSession::new(user_id, username, code, rng_seed);
        self.store.insert(session.clone()).await?;

        info!(game_id = %session.id, code = %session.code, "game created");
        self.notifier
            .publish(
                Topic::Lobby,
                GameEvent::GameCreated {
                    game: GameSummary::from(&session),
                },
            )
            .await;
        Ok(session)
    }

    /// Seat a new player at a waiting table, addressed by room code.
    pub async fn join_game(
        &self,
        code: &str,
        user_id: Uuid,
        username: String,
    ) -> Result<GameSession, DomainError> {
        let id = self
            .store
            .find_by_code(code)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, "Game not found"))?
            .id;

        let _guard = self.locks.acquire(id).await;
        // Re-read under the lock: the code lookup raced other mutations.
        let mut session = self.require_session(id).await?;

        if session.status != GameStatus::Waiting {
            return Err(DomainError::conflict(
                ConflictKind::GameStarted,
                "Game has already started",
            ));
        }
        if session.players.len() >= rules::MAX_PLAYERS {
            return Err(DomainError::conflict(ConflictKind::GameFull, "Game is full"));
        }
        if session.player_index(user_id).is_some() {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyJoined,
                "You are already in this game",
            ));
        }

        session.players.push(Player::new(user_id, username));
        self.store.update(&session).await?;

        info!(game_id = %session.id, %user_id, "player joined");
        self.notifier
            .publish(
                Topic::Game(session.id),
                GameEvent::PlayerJoined {
                    players: session.players.clone(),
                },
            )
            .await;
        Ok(session)
    }

    /// Remove a player, or tear the session down when the host leaves or
    /// anyone abandons a session that is past the lobby.
    pub async fn leave_game(
        &self,
        game_id: Uuid,
        user_id: Uuid,
    ) -> Result<LeaveOutcome, DomainError> {
        let guard = self.locks.acquire(game_id).await;
        let mut session = self.require_session(game_id).await?;

        let is_host = session.is_host(user_id);
        let mid_game = matches!(
            session.status,
            GameStatus::InProgress | GameStatus::SelectingTrump
        );

        if is_host || mid_game {
            self.store.delete(game_id).await?;
            drop(guard);
            self.locks.discard(game_id);

            let reason = if is_host {
                "Host left the game".to_string()
            } else {
                "A player left the game".to_string()
            };
            info!(%game_id, %user_id, reason, "game deleted");
            self.notifier
                .publish(
                    Topic::Game(game_id),
                    GameEvent::GameDeleted {
                        reason: reason.clone(),
                    },
                )
                .await;
            return Ok(LeaveOutcome::Deleted { reason });
        }

        session.players.retain(|p| p.user_id != user_id);
        self.store.update(&session).await?;

        info!(%game_id, %user_id, "player left");
        self.notifier
            .publish(
                Topic::Game(game_id),
                GameEvent::PlayerLeft {
                    players: session.players.clone(),
                    user_id,
                },
            )
            .await;
        Ok(LeaveOutcome::Left(session))
    }

    /// Start the game: fix the round count, deal round 1, flip trump.
    pub async fn start_game(
        &self,
        game_id: Uuid,
        user_id: Uuid,
    ) -> Result<GameSession, DomainError> {
        let _guard = self.locks.acquire(game_id).await;
        let mut session = self.require_session(game_id).await?;

        if !session.is_host(user_id) {
            return Err(DomainError::forbidden("Only the host can start the game"));
        }
        if session.status != GameStatus::Waiting {
            return Err(DomainError::conflict(
                ConflictKind::GameStarted,
                "Game has already started",
            ));
        }
        if session.players.len() < rules::MIN_PLAYERS {
            return Err(DomainError::validation(format!(
                "Need at least {} players to start",
                rules::MIN_PLAYERS
            )));
        }

        session.total_rounds = rules::total_rounds(session.players.len());
        session.current_player_index = 0;
        dealing::deal_round(&mut session, 1)?;
        self.store.update(&session).await?;

        info!(
            %game_id,
            players = session.players.len(),
            total_rounds = session.total_rounds,
            status = ?session.status,
            "game started"
        );
        self.notifier
            .publish(
                Topic::Game(game_id),
                GameEvent::GameStarted {
                    room_code: session.code.clone(),
                    status: session.status,
                },
            )
            .await;
        Ok(session)
    }

    /// Host resolves a wizard trump flip by choosing the round's trump color.
    pub async fn select_trump(
        &self,
        game_id: Uuid,
        user_id: Uuid,
        color: CardColor,
    ) -> Result<GameSession, DomainError> {
        let _guard = self.locks.acquire(game_id).await;
        let mut session = self.require_session(game_id).await?;

        if !session.is_host(user_id) {
            return Err(DomainError::forbidden(
                "Only the host can select the trump color",
            ));
        }
        if session.status != GameStatus::SelectingTrump {
            return Err(DomainError::conflict(
                ConflictKind::PhaseMismatch,
                "Game is not in trump selection phase",
            ));
        }

        session.trump_color = Some(color);
        session.status = GameStatus::InProgress;
        self.store.update(&session).await?;

        info!(%game_id, %color, "trump selected");
        self.notifier
            .publish(
                Topic::Game(game_id),
                GameEvent::TrumpSelected { trump_color: color },
            )
            .await;
        Ok(session)
    }

    /// Record one bid for the round.
    pub async fn place_bid(
        &self,
        game_id: Uuid,
        user_id: Uuid,
        amount: u8,
    ) -> Result<GameSession, DomainError> {
        let _guard = self.locks.acquire(game_id).await;
        let mut session = self.require_session(game_id).await?;

        bidding::place_bid(&mut session, user_id, amount)?;
        self.store.update(&session).await?;

        info!(%game_id, %user_id, amount, "bid placed");
        self.notifier
            .publish(
                Topic::Game(game_id),
                GameEvent::GameUpdated {
                    game: session.clone(),
                },
            )
            .await;
        Ok(session)
    }

    /// Play a card; may resolve a trick, close a round, or finish the game.
    pub async fn play_card(
        &self,
        game_id: Uuid,
        user_id: Uuid,
        card_id: &str,
    ) -> Result<(GameSession, PlayCardOutcome), DomainError> {
        let _guard = self.locks.acquire(game_id).await;
        let mut session = self.require_session(game_id).await?;

        let outcome = tricks::play_card(&mut session, user_id, card_id)?;
        self.store.update(&session).await?;

        info!(
            %game_id,
            %user_id,
            card = card_id,
            trick_completed = outcome.trick_completed,
            round_completed = outcome.round_completed,
            game_finished = outcome.game_finished,
            "card played"
        );
        let event = if outcome.game_finished {
            GameEvent::GameFinished {
                game: session.clone(),
            }
        } else {
            GameEvent::GameUpdated {
                game: session.clone(),
            }
        };
        self.notifier.publish(Topic::Game(game_id), event).await;
        Ok((session, outcome))
    }

    /// Read-only lookup by room code.
    pub async fn find_by_code(&self, code: &str) -> Result<GameSession, DomainError> {
        self.store
            .find_by_code(code)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, "Game not found"))
    }
}
