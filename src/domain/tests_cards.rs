use serde_json::json;

use crate::domain::cards_types::{full_deck, Card, CardColor, CardKind};
use crate::domain::rules::DECK_SIZE;

#[test]
fn full_deck_composition() {
    let deck = full_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.iter().filter(|c| c.kind() == CardKind::Regular).count(), 52);
    assert_eq!(deck.iter().filter(|c| c.is_wizard()).count(), 4);
    assert_eq!(deck.iter().filter(|c| c.is_jester()).count(), 4);

    let ids: std::collections::HashSet<String> = deck.iter().map(Card::id).collect();
    assert_eq!(ids.len(), DECK_SIZE, "card ids must be unique");
}

#[test]
fn card_id_round_trip() {
    for card in full_deck() {
        let parsed: Card = card.id().parse().expect("generated id must parse");
        assert_eq!(parsed, card);
    }
}

#[test]
fn card_id_examples() {
    assert_eq!(
        Card::Regular {
            color: CardColor::Red,
            value: 7
        }
        .id(),
        "red-07"
    );
    assert_eq!(
        Card::Regular {
            color: CardColor::Blue,
            value: 13
        }
        .id(),
        "blue-13"
    );
    assert_eq!(Card::Wizard { copy: 2 }.id(), "wizard-2");
    assert_eq!(Card::Jester { copy: 4 }.id(), "jester-4");
}

#[test]
fn invalid_card_ids_rejected() {
    for bad in ["", "red", "red-00", "red-14", "purple-03", "wizard-5", "jester-0", "wizard-x"] {
        assert!(bad.parse::<Card>().is_err(), "id '{bad}' should not parse");
    }
}

#[test]
fn card_wire_shape() {
    let card = Card::Regular {
        color: CardColor::Green,
        value: 11,
    };
    assert_eq!(
        serde_json::to_value(card).unwrap(),
        json!({"id": "green-11", "type": "regular", "color": "green", "value": 11})
    );

    let wizard = Card::Wizard { copy: 1 };
    assert_eq!(
        serde_json::to_value(wizard).unwrap(),
        json!({"id": "wizard-1", "type": "wizard", "color": null, "value": null})
    );
}

#[test]
fn card_wire_round_trip() {
    for card in full_deck() {
        let encoded = serde_json::to_string(&card).unwrap();
        let decoded: Card = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, card);
    }
}

#[test]
fn card_wire_rejects_mismatched_type() {
    let err = serde_json::from_value::<Card>(
        json!({"id": "red-05", "type": "wizard", "color": null, "value": null}),
    );
    assert!(err.is_err());
}

#[test]
fn color_serde_is_lowercase() {
    assert_eq!(serde_json::to_value(CardColor::Yellow).unwrap(), json!("yellow"));
    let color: CardColor = serde_json::from_value(json!("blue")).unwrap();
    assert_eq!(color, CardColor::Blue);
    assert!(serde_json::from_value::<CardColor>(json!("purple")).is_err());
}
