//! Full-game walkthrough at the domain layer: deal, bid, and play every
//! round to completion, checking conservation and scoring along the way.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::bidding::place_bid;
use crate::domain::dealing::deal_round;
use crate::domain::rules::DECK_SIZE;
use crate::domain::state::{GameSession, GameStatus};
use crate::domain::test_state_helpers::lobby_session;
use crate::domain::tricks::play_card;
use crate::domain::CardColor;

fn assert_card_conservation(session: &GameSession) {
    let in_hands: usize = session.players.iter().map(|p| p.hand.len()).sum();
    let in_tricks: usize = session.current_trick.len()
        + session
            .completed_tricks
            .iter()
            .map(|t| t.cards.len())
            .sum::<usize>();
    let flip = usize::from(session.trump_card.is_some());
    assert_eq!(
        in_hands + in_tricks + session.deck.len() + flip,
        DECK_SIZE,
        "every card must be in a hand, a trick, the stock, or the flip"
    );
}

#[test]
fn three_player_game_plays_to_the_end() {
    let mut session = lobby_session(3, 4242);
    session.status = GameStatus::Waiting;
    session.total_rounds = 20;
    session.current_player_index = 0;
    deal_round(&mut session, 1).unwrap();

    let ids: Vec<Uuid> = session.players.iter().map(|p| p.user_id).collect();
    let mut expected_scores: HashMap<Uuid, i32> = ids.iter().map(|id| (*id, 0)).collect();
    let mut tricks_this_round: HashMap<Uuid, i32> = HashMap::new();

    let mut steps = 0u32;
    while session.status != GameStatus::Finished {
        steps += 1;
        assert!(steps < 10_000, "game failed to terminate");

        match session.status {
            GameStatus::SelectingTrump => {
                // Stand-in for the host's trump pick after a wizard flip.
                session.trump_color = Some(CardColor::Red);
                session.status = GameStatus::InProgress;
            }
            GameStatus::InProgress => {
                if !session.bidding_complete() {
                    let unbid: Vec<Uuid> = session
                        .players
                        .iter()
                        .filter(|p| p.bid.is_none())
                        .map(|p| p.user_id)
                        .collect();
                    for id in unbid {
                        place_bid(&mut session, id, 0).unwrap();
                    }
                    continue;
                }

                let who = session.current_player().unwrap().user_id;
                let card_id = session.current_player().unwrap().hand[0].id();
                let outcome = play_card(&mut session, who, &card_id).unwrap();

                if let Some(winner) = outcome.trick_winner {
                    *tricks_this_round.entry(winner).or_insert(0) += 1;
                }
                if outcome.round_completed {
                    // Everyone bid zero, so an exact round is +20 and each
                    // trick taken costs 10.
                    for id in &ids {
                        let taken = tricks_this_round.get(id).copied().unwrap_or(0);
                        let delta = if taken == 0 { 20 } else { -10 * taken };
                        *expected_scores.get_mut(id).unwrap() += delta;
                    }
                    tricks_this_round.clear();
                } else if session.status == GameStatus::InProgress {
                    assert_card_conservation(&session);
                }
            }
            other => panic!("unexpected status mid-game: {other:?}"),
        }
    }

    assert_eq!(session.round, 20);
    for player in &session.players {
        assert!(player.hand.is_empty());
        assert_eq!(
            player.score,
            expected_scores[&player.user_id],
            "score mismatch for {}",
            player.username
        );
    }
    // Twenty rounds of all-zero bids: total tricks taken equals the cards
    // played, so the score sum is fully determined by the trick tallies.
    let total: i32 = session.players.iter().map(|p| p.score).sum();
    let expected_total: i32 = expected_scores.values().sum();
    assert_eq!(total, expected_total);
}

#[test]
fn six_player_game_reaches_round_ten() {
    let mut session = lobby_session(6, 77);
    session.total_rounds = 10;
    session.current_player_index = 0;
    deal_round(&mut session, 1).unwrap();

    let mut steps = 0u32;
    while session.status != GameStatus::Finished {
        steps += 1;
        assert!(steps < 10_000, "game failed to terminate");

        match session.status {
            GameStatus::SelectingTrump => {
                session.trump_color = Some(CardColor::Green);
                session.status = GameStatus::InProgress;
            }
            GameStatus::InProgress => {
                if !session.bidding_complete() {
                    let unbid: Vec<Uuid> = session
                        .players
                        .iter()
                        .filter(|p| p.bid.is_none())
                        .map(|p| p.user_id)
                        .collect();
                    for id in unbid {
                        place_bid(&mut session, id, 0).unwrap();
                    }
                    continue;
                }
                let who = session.current_player().unwrap().user_id;
                let card_id = session.current_player().unwrap().hand[0].id();
                play_card(&mut session, who, &card_id).unwrap();
            }
            other => panic!("unexpected status mid-game: {other:?}"),
        }
    }

    assert_eq!(session.round, 10);
    assert!(session.players.iter().all(|p| p.hand.is_empty()));
}
