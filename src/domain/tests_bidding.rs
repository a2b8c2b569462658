use uuid::Uuid;

use crate::domain::bidding::place_bid;
use crate::domain::state::GameStatus;
use crate::domain::test_state_helpers::{lobby_session, regular, session_with_hands};
use crate::domain::CardColor;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

fn bidding_session() -> crate::domain::GameSession {
    let hands = [
        &[regular(CardColor::Red, 1), regular(CardColor::Red, 2)][..],
        &[regular(CardColor::Blue, 1), regular(CardColor::Blue, 2)][..],
        &[regular(CardColor::Green, 1), regular(CardColor::Green, 2)][..],
    ];
    let mut session = session_with_hands(&hands, Some(CardColor::Yellow));
    for player in &mut session.players {
        player.bid = None;
    }
    session
}

#[test]
fn bids_recorded_and_completeness_tracked() {
    let mut session = bidding_session();
    assert!(!session.bidding_complete());

    let ids: Vec<Uuid> = session.players.iter().map(|p| p.user_id).collect();
    place_bid(&mut session, ids[0], 0).unwrap();
    place_bid(&mut session, ids[1], 2).unwrap();
    assert!(!session.bidding_complete());
    place_bid(&mut session, ids[2], 1).unwrap();
    assert!(session.bidding_complete());

    assert_eq!(session.players[0].bid, Some(0));
    assert_eq!(session.players[1].bid, Some(2));
    assert_eq!(session.players[2].bid, Some(1));
}

#[test]
fn bid_must_stay_within_round() {
    let mut session = bidding_session();
    let who = session.players[0].user_id;
    let err = place_bid(&mut session, who, 3).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(session.players[0].bid, None, "rejected bid must not stick");

    place_bid(&mut session, who, 2).unwrap();
}

#[test]
fn double_bid_rejected() {
    let mut session = bidding_session();
    let who = session.players[0].user_id;
    place_bid(&mut session, who, 1).unwrap();
    let err = place_bid(&mut session, who, 1).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::AlreadyBid, _)
    ));
}

#[test]
fn bidding_closed_once_everyone_bid() {
    let mut session = bidding_session();
    let ids: Vec<Uuid> = session.players.iter().map(|p| p.user_id).collect();
    for id in &ids {
        place_bid(&mut session, *id, 0).unwrap();
    }
    let err = place_bid(&mut session, ids[0], 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::BidsClosed, _)
    ));
}

#[test]
fn bid_requires_in_progress_status() {
    let mut session = lobby_session(3, 1);
    let who = session.players[0].user_id;
    let err = place_bid(&mut session, who, 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::PhaseMismatch, _)
    ));

    let mut selecting = bidding_session();
    selecting.status = GameStatus::SelectingTrump;
    let who = selecting.players[0].user_id;
    let err = place_bid(&mut selecting, who, 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::PhaseMismatch, _)
    ));
}

#[test]
fn unknown_player_cannot_bid() {
    let mut session = bidding_session();
    let err = place_bid(&mut session, Uuid::new_v4(), 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::NotFound(NotFoundKind::Player, _)
    ));
}
