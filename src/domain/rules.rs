//! Table rules: deck composition, player limits, round schedule, bid range.

use std::ops::RangeInclusive;

pub const DECK_SIZE: usize = 60;
pub const COLOR_VALUES: u8 = 13;
pub const SPECIAL_COPIES: u8 = 4;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

pub const ROOM_CODE_LEN: usize = 6;

/// Number of rounds for a table of `player_count` players. The round number
/// doubles as the hand size, so the schedule ends when the deal would need
/// more cards than the deck holds.
pub fn total_rounds(player_count: usize) -> u8 {
    (DECK_SIZE / player_count) as u8
}

/// A bid for round `round` must predict between zero and `round` tricks.
pub fn valid_bid_range(round: u8) -> RangeInclusive<u8> {
    0..=round
}
