//! Card play: turn validation, trick accumulation, and trick resolution.

use uuid::Uuid;

use crate::domain::cards_logic::resolve_trick;
use crate::domain::scoring::finish_round;
use crate::domain::state::{CompletedTrick, GameSession, GameStatus, TrickPlay};
use crate::errors::domain::{ConflictKind, DomainError};

/// What changed as a result of playing one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayCardOutcome {
    /// A trick was completed by this play.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Uuid>,
    /// The round ended (all hands empty) and was scored.
    pub round_completed: bool,
    /// The final round was scored; the session is finished.
    pub game_finished: bool,
}

/// Play `card_id` for `user_id`.
///
/// Requires the session to be in progress, the player to be on turn with
/// bidding closed, and the card to be in the player's hand. Completing a
/// trick resolves it in the same operation: the winner's tally increments,
/// the trick moves to the completed list, and the winner leads the next
/// trick. Emptying every hand hands off to round scoring, which may deal the
/// next round or finish the game.
pub fn play_card(
    session: &mut GameSession,
    user_id: Uuid,
    card_id: &str,
) -> Result<PlayCardOutcome, DomainError> {
    if session.status != GameStatus::InProgress {
        return Err(DomainError::conflict(
            ConflictKind::PhaseMismatch,
            "Game is not in progress",
        ));
    }

    let seat = session.current_player_index;
    let on_turn = session
        .current_player()
        .map(|p| p.user_id == user_id)
        .unwrap_or(false);
    if !on_turn {
        return Err(DomainError::conflict(
            ConflictKind::OutOfTurn,
            "It is not your turn",
        ));
    }

    if !session.bidding_complete() {
        return Err(DomainError::conflict(
            ConflictKind::BiddingOpen,
            "All players must bid before playing",
        ));
    }

    let player = &mut session.players[seat];
    let pos = player
        .hand
        .iter()
        .position(|c| c.id() == card_id)
        .ok_or_else(|| {
            DomainError::conflict(ConflictKind::CardNotInHand, "You do not have this card")
        })?;
    let card = player.hand.remove(pos);
    let username = player.username.clone();

    session.current_trick.push(TrickPlay {
        player_id: user_id,
        username,
        card,
    });

    let mut outcome = PlayCardOutcome::default();

    if session.current_trick.len() < session.players.len() {
        session.current_player_index = (session.current_player_index + 1) % session.players.len();
        return Ok(outcome);
    }

    // Trick complete: resolve the winner and let them lead the next trick.
    let winner_play = resolve_trick(&session.current_trick, session.trump_color);
    let winner_id = session.current_trick[winner_play].player_id;
    let winner_username = session.current_trick[winner_play].username.clone();
    // The winner was on turn earlier this trick, so the seat lookup cannot miss.
    let winner_seat = session.player_index(winner_id).ok_or_else(|| {
        DomainError::validation("Invariant violated: trick winner is not seated")
    })?;

    session.players[winner_seat].tricks_won += 1;
    let cards = std::mem::take(&mut session.current_trick);
    session.completed_tricks.push(CompletedTrick {
        cards,
        winner_id,
        winner_username,
    });
    session.current_player_index = winner_seat;

    outcome.trick_completed = true;
    outcome.trick_winner = Some(winner_id);

    if session.hands_empty() {
        outcome.round_completed = true;
        outcome.game_finished = finish_round(session)?;
    }

    Ok(outcome)
}
