//! Stable card identifiers and their parsing.
//!
//! Every card has a textual id that survives shuffling and serialization:
//! `red-07`, `blue-13`, `wizard-2`, `jester-4`. Clients reference cards by
//! id when playing; the engine never relies on pointer identity.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::domain::cards_types::{Card, CardColor};
use crate::domain::rules::{COLOR_VALUES, SPECIAL_COPIES};
use crate::errors::domain::DomainError;

impl Display for CardColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            CardColor::Red => "red",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Yellow => "yellow",
        };
        write!(f, "{s}")
    }
}

impl FromStr for CardColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(CardColor::Red),
            "blue" => Ok(CardColor::Blue),
            "green" => Ok(CardColor::Green),
            "yellow" => Ok(CardColor::Yellow),
            other => Err(DomainError::validation(format!(
                "Invalid color '{other}'. Must be red, blue, green or yellow"
            ))),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Card::Regular { color, value } => write!(f, "{color}-{value:02}"),
            Card::Wizard { copy } => write!(f, "wizard-{copy}"),
            Card::Jester { copy } => write!(f, "jester-{copy}"),
        }
    }
}

impl Card {
    /// Stable identifier, e.g. `green-11` or `wizard-3`.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || DomainError::validation(format!("Unrecognized card id '{s}'"));

        let (head, tail) = s.split_once('-').ok_or_else(bad)?;
        match head {
            "wizard" | "jester" => {
                let copy: u8 = tail.parse().map_err(|_| bad())?;
                if !(1..=SPECIAL_COPIES).contains(&copy) {
                    return Err(bad());
                }
                if head == "wizard" {
                    Ok(Card::Wizard { copy })
                } else {
                    Ok(Card::Jester { copy })
                }
            }
            color => {
                let color: CardColor = color.parse().map_err(|_| bad())?;
                let value: u8 = tail.parse().map_err(|_| bad())?;
                if !(1..=COLOR_VALUES).contains(&value) {
                    return Err(bad());
                }
                Ok(Card::Regular { color, value })
            }
        }
    }
}
