//! Trick precedence: which card is winning a trick.

use crate::domain::cards_types::{Card, CardColor};
use crate::domain::state::TrickPlay;

/// Whether `candidate` displaces `best` as the winning card of a trick.
///
/// Fixed precedence, first-played wins all ties:
/// - a wizard beats everything except an earlier wizard;
/// - a jester never displaces the running best;
/// - a trump-colored card beats any non-wizard best of a different color;
/// - within one color, the higher value wins;
/// - a card matching neither the trump color nor the best's color loses.
pub fn beats_current(candidate: Card, best: Card, trump: Option<CardColor>) -> bool {
    if candidate.is_wizard() {
        return !best.is_wizard();
    }
    if candidate.is_jester() {
        return false;
    }
    if best.is_wizard() {
        return false;
    }

    // Candidate is a regular card from here on; best is regular or jester.
    if trump.is_some() && candidate.color() == trump && best.color() != trump {
        return true;
    }
    if candidate.color() == best.color() {
        return candidate.value() > best.value();
    }
    false
}

/// Index (in play order) of the winning card of a complete trick.
///
/// The running best starts at the first card played, so a trick led by a
/// jester stays with that jester until a wizard or trump card appears.
pub fn resolve_trick(plays: &[TrickPlay], trump: Option<CardColor>) -> usize {
    let mut best = 0;
    for i in 1..plays.len() {
        if beats_current(plays[i].card, plays[best].card, trump) {
            best = i;
        }
    }
    best
}
