//! Shuffling and per-round dealing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::cards_types::{full_deck, Card, CardKind};
use crate::domain::rules::DECK_SIZE;
use crate::domain::seed::derive_dealing_seed;
use crate::domain::state::{GameSession, GameStatus};
use crate::errors::domain::DomainError;

/// Unbiased Fisher-Yates shuffle: walk from the last index down, swapping
/// with a uniform draw over `[0, i]`.
pub fn shuffle<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
}

/// Deal a round: rebuild and reshuffle the full deck, give `round_no` cards
/// to each player in seat order, flip the next card as trump, and keep the
/// rest as the stock. Remainders from earlier rounds are never reused.
///
/// Trump policy from the flipped card:
/// - regular: its color becomes trump, play proceeds;
/// - jester: no trump this round, play proceeds;
/// - wizard: no trump yet, the session waits for the host's color choice;
/// - no card left to flip (the final round consumes the whole deck): same as
///   a jester.
pub fn deal_round(session: &mut GameSession, round_no: u8) -> Result<(), DomainError> {
    let player_count = session.players.len();
    let hand_size = round_no as usize;
    if round_no == 0 || player_count * hand_size > DECK_SIZE {
        return Err(DomainError::validation(format!(
            "Cannot deal {hand_size} cards to {player_count} players"
        )));
    }

    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(derive_dealing_seed(session.rng_seed, round_no));
    shuffle(&mut deck, &mut rng);

    for (seat, player) in session.players.iter_mut().enumerate() {
        player.hand = deck[seat * hand_size..(seat + 1) * hand_size].to_vec();
    }

    let flip = deck.get(player_count * hand_size).copied();
    session.deck = deck
        .get(player_count * hand_size + 1..)
        .map(<[Card]>::to_vec)
        .unwrap_or_default();
    session.trump_card = flip;
    session.round = round_no;
    session.current_trick.clear();

    match flip {
        Some(card) if card.kind() == CardKind::Regular => {
            session.trump_color = card.color();
            session.status = GameStatus::InProgress;
        }
        Some(card) if card.kind() == CardKind::Wizard => {
            session.trump_color = None;
            session.status = GameStatus::SelectingTrump;
        }
        // Jester flipped, or no card left after dealing.
        _ => {
            session.trump_color = None;
            session.status = GameStatus::InProgress;
        }
    }

    Ok(())
}
