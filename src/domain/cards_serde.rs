//! Wire serialization for cards.
//!
//! Cards travel as `{"id":"red-07","type":"regular","color":"red","value":7}`.
//! The id alone determines the card; the remaining fields are convenience for
//! clients and are checked for consistency on the way back in.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::cards_types::{Card, CardColor, CardKind};

impl Serialize for CardColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CardColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            D::Error::custom(format!(
                "invalid card color '{s}', expected red/blue/green/yellow"
            ))
        })
    }
}

impl CardKind {
    fn as_str(&self) -> &'static str {
        match self {
            CardKind::Regular => "regular",
            CardKind::Wizard => "wizard",
            CardKind::Jester => "jester",
        }
    }
}

impl Serialize for CardKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize)]
struct CardWire {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    color: Option<CardColor>,
    value: Option<u8>,
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CardWire {
            id: self.id(),
            kind: self.kind().as_str().to_string(),
            color: self.color(),
            value: self.value(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = CardWire::deserialize(deserializer)?;
        let card: Card = wire
            .id
            .parse()
            .map_err(|_| D::Error::custom(format!("unrecognized card id '{}'", wire.id)))?;
        if wire.kind != card.kind().as_str() {
            return Err(D::Error::custom(format!(
                "card id '{}' does not match type '{}'",
                wire.id, wire.kind
            )));
        }
        Ok(card)
    }
}
