use crate::domain::scoring::{apply_round_scoring, finish_round, score_delta};
use crate::domain::state::GameStatus;
use crate::domain::test_state_helpers::{regular, session_with_hands};
use crate::domain::CardColor;

#[test]
fn score_delta_examples() {
    assert_eq!(score_delta(3, 3), 50);
    assert_eq!(score_delta(2, 0), -20);
    assert_eq!(score_delta(0, 0), 20);
    assert_eq!(score_delta(0, 3), -30);
    assert_eq!(score_delta(5, 2), -30);
    assert_eq!(score_delta(1, 1), 30);
}

#[test]
fn round_scoring_applies_every_player_delta() {
    let hands = [&[][..], &[][..], &[][..]];
    let mut session = session_with_hands(&hands, None);
    session.round = 3;
    session.players[0].bid = Some(2);
    session.players[0].tricks_won = 2;
    session.players[1].bid = Some(1);
    session.players[1].tricks_won = 0;
    session.players[2].bid = Some(0);
    session.players[2].tricks_won = 1;
    session.players[2].score = -40; // carries over across rounds

    apply_round_scoring(&mut session);

    assert_eq!(session.players[0].score, 40);
    assert_eq!(session.players[1].score, -10);
    assert_eq!(session.players[2].score, -50);
}

#[test]
fn finish_round_advances_and_resets_round_state() {
    let hands = [&[][..], &[][..], &[][..]];
    let mut session = session_with_hands(&hands, Some(CardColor::Red));
    session.round = 1;
    session.total_rounds = 20;
    for player in &mut session.players {
        player.bid = Some(0);
        player.tricks_won = 0;
    }
    session.players[1].bid = Some(1);
    session.players[1].tricks_won = 1;
    session.completed_tricks.push(crate::domain::state::CompletedTrick {
        cards: Vec::new(),
        winner_id: session.players[1].user_id,
        winner_username: session.players[1].username.clone(),
    });

    let finished = finish_round(&mut session).unwrap();

    assert!(!finished);
    assert_eq!(session.round, 2);
    assert!(session.completed_tricks.is_empty());
    for player in &session.players {
        assert_eq!(player.bid, None);
        assert_eq!(player.tricks_won, 0);
        assert_eq!(player.hand.len(), 2, "next round must be dealt");
    }
    // Scores from round 1 stick: exact zero bids +20, exact one bid +30.
    assert_eq!(session.players[0].score, 20);
    assert_eq!(session.players[1].score, 30);
    assert_eq!(session.players[2].score, 20);
}

#[test]
fn finish_round_is_terminal_on_last_round() {
    let hands = [&[][..], &[][..], &[][..]];
    let mut session = session_with_hands(&hands, None);
    session.round = 20;
    session.total_rounds = 20;
    for player in &mut session.players {
        player.bid = Some(0);
        player.tricks_won = 0;
    }

    let finished = finish_round(&mut session).unwrap();

    assert!(finished);
    assert_eq!(session.status, GameStatus::Finished);
    // Terminal: nothing is re-dealt and per-round state is left as played.
    for player in &session.players {
        assert!(player.hand.is_empty());
        assert_eq!(player.bid, Some(0));
        assert_eq!(player.score, 20);
    }
}

#[test]
fn score_accumulates_across_two_rounds() {
    let hands = [&[regular(CardColor::Red, 1)][..], &[][..], &[][..]];
    let mut session = session_with_hands(&hands, None);
    session.round = 1;
    session.total_rounds = 20;
    session.players[0].hand.clear();
    session.players[0].bid = Some(1);
    session.players[0].tricks_won = 1;
    session.players[1].bid = Some(0);
    session.players[2].bid = Some(0);

    finish_round(&mut session).unwrap(); // +30 / +20 / +20

    session.players[0].bid = Some(0);
    session.players[0].tricks_won = 2;
    session.players[1].bid = Some(2);
    session.players[1].tricks_won = 2;
    session.players[2].bid = Some(0);
    session.players[2].tricks_won = 0;
    for player in &mut session.players {
        player.hand.clear();
    }
    finish_round(&mut session).unwrap(); // -20 / +40 / +20

    assert_eq!(session.players[0].score, 10);
    assert_eq!(session.players[1].score, 60);
    assert_eq!(session.players[2].score, 40);
}
