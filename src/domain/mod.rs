//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod rules;
pub mod scoring;
pub mod seed;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_cards;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use cards_logic::{beats_current, resolve_trick};
pub use cards_types::{full_deck, Card, CardColor, CardKind};
pub use dealing::deal_round;
pub use rules::total_rounds;
pub use seed::derive_dealing_seed;
pub use state::{CompletedTrick, GameSession, GameStatus, Player, TrickPlay};
