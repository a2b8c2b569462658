//! Bid validation and recording.
//!
//! One bid per player per round, in `[0, round]`, only while the session is
//! in progress and bidding has not already closed. Card play stays blocked
//! until every player has bid; the next round's deal resets all bids.

use uuid::Uuid;

use crate::domain::rules::valid_bid_range;
use crate::domain::state::{GameSession, GameStatus};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

pub fn place_bid(session: &mut GameSession, user_id: Uuid, amount: u8) -> Result<(), DomainError> {
    if session.status != GameStatus::InProgress {
        return Err(DomainError::conflict(
            ConflictKind::PhaseMismatch,
            "Game is not in progress",
        ));
    }
    if session.bidding_complete() {
        return Err(DomainError::conflict(
            ConflictKind::BidsClosed,
            "All bids have already been placed",
        ));
    }

    let round = session.round;
    let idx = session.player_index(user_id).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, "Player not found in this game")
    })?;
    if session.players[idx].bid.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyBid,
            "You have already placed a bid",
        ));
    }
    if !valid_bid_range(round).contains(&amount) {
        return Err(DomainError::validation(format!(
            "Bid must be between 0 and {round}"
        )));
    }

    session.players[idx].bid = Some(amount);
    Ok(())
}
