//! Core card types for the 60-card Wizard deck: four colors of 1..=13,
//! four wizards, four jesters.

use crate::domain::rules::{COLOR_VALUES, DECK_SIZE, SPECIAL_COPIES};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl CardColor {
    pub const ALL: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardKind {
    Regular,
    Wizard,
    Jester,
}

/// A single card. Wizards and jesters carry a copy index (1..=4) so that all
/// 60 cards have a distinct, stable identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Regular { color: CardColor, value: u8 },
    Wizard { copy: u8 },
    Jester { copy: u8 },
}

impl Card {
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Regular { .. } => CardKind::Regular,
            Card::Wizard { .. } => CardKind::Wizard,
            Card::Jester { .. } => CardKind::Jester,
        }
    }

    /// Color of a regular card; wizards and jesters have none.
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Regular { color, .. } => Some(*color),
            _ => None,
        }
    }

    /// Numeric value of a regular card; wizards and jesters have none.
    pub fn value(&self) -> Option<u8> {
        match self {
            Card::Regular { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn is_wizard(&self) -> bool {
        matches!(self, Card::Wizard { .. })
    }

    pub fn is_jester(&self) -> bool {
        matches!(self, Card::Jester { .. })
    }
}

/// The full 60-card deck in canonical order: colors in `CardColor::ALL`
/// order with values 1..=13, then the four wizards, then the four jesters.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in CardColor::ALL {
        for value in 1..=COLOR_VALUES {
            deck.push(Card::Regular { color, value });
        }
    }
    for copy in 1..=SPECIAL_COPIES {
        deck.push(Card::Wizard { copy });
    }
    for copy in 1..=SPECIAL_COPIES {
        deck.push(Card::Jester { copy });
    }
    deck
}
