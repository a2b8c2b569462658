//! Round scoring and round/game progression.

use crate::domain::dealing::deal_round;
use crate::domain::state::{GameSession, GameStatus};
use crate::errors::domain::DomainError;

/// Score change for one player at round end: `20 + 10 * bid` for an exact
/// bid, otherwise `-10` per trick of miss (never a bonus).
pub fn score_delta(bid: u8, tricks_won: u8) -> i32 {
    if tricks_won == bid {
        20 + 10 * bid as i32
    } else {
        -10 * (bid as i32 - tricks_won as i32).abs()
    }
}

/// Apply each player's round delta to their cumulative score.
pub fn apply_round_scoring(session: &mut GameSession) {
    for player in &mut session.players {
        player.score += score_delta(player.bid.unwrap_or(0), player.tricks_won);
    }
}

/// Close out a completed round: score it, then either finish the game or
/// reset per-round state and deal the next round. Returns `true` when the
/// game just finished.
pub fn finish_round(session: &mut GameSession) -> Result<bool, DomainError> {
    apply_round_scoring(session);

    if session.round >= session.total_rounds {
        session.status = GameStatus::Finished;
        return Ok(true);
    }

    let next_round = session.round + 1;
    for player in &mut session.players {
        player.bid = None;
        player.tricks_won = 0;
    }
    session.completed_tricks.clear();
    deal_round(session, next_round)?;
    Ok(false)
}
