//! Deck construction.
//!
//! A deck is two independent copies of the catalog, concatenated. The
//! controller shuffles it separately; `build_deck` itself is order-
//! preserving so the pairing invariant is easy to test.

use crate::cards::{CardCatalog, CardInstance};

/// An ordered sequence of card instances, length `2 × catalog size`.
///
/// Invariant: every catalog definition appears exactly twice. Built once
/// per round and replaced wholesale on reset.
pub type Deck = Vec<CardInstance>;

/// Build an unshuffled deck of matching pairs from the catalog.
///
/// Produces two independent instances per definition, all face-down.
/// Mutating one instance's `revealed` flag never affects any other,
/// including its pair-mate.
///
/// ## Example
///
/// ```
/// use match_pairs::cards::CardCatalog;
/// use match_pairs::round::build_deck;
///
/// let deck = build_deck(&CardCatalog::starter());
/// assert_eq!(deck.len(), 4);
/// assert!(deck.iter().all(|c| !c.revealed));
/// ```
#[must_use]
pub fn build_deck(catalog: &CardCatalog) -> Deck {
    let first: Vec<CardInstance> = catalog.iter().map(CardInstance::from_definition).collect();
    let second: Vec<CardInstance> = catalog.iter().map(CardInstance::from_definition).collect();

    let mut deck = first;
    deck.extend(second);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    #[test]
    fn test_deck_length_and_pairing() {
        let mut catalog = CardCatalog::new();
        catalog.register_auto("apple", "/a.png");
        catalog.register_auto("orange", "/o.png");
        catalog.register_auto("pear", "/p.png");

        let deck = build_deck(&catalog);

        assert_eq!(deck.len(), 6);
        for def in catalog.iter() {
            let count = deck.iter().filter(|c| c.card_id == def.id).count();
            assert_eq!(count, 2, "definition {} must appear twice", def.id);
        }
    }

    #[test]
    fn test_deck_starts_face_down() {
        let deck = build_deck(&CardCatalog::starter());
        assert!(deck.iter().all(|c| !c.revealed));
    }

    #[test]
    fn test_pair_mates_are_independent() {
        let mut catalog = CardCatalog::new();
        let id = catalog.register_auto("apple", "/a.png");

        let mut deck = build_deck(&catalog);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0].card_id, id);
        assert_eq!(deck[1].card_id, id);

        deck[0].revealed = true;

        assert!(deck[0].revealed);
        assert!(!deck[1].revealed, "pair-mate must not alias its twin");
    }

    #[test]
    fn test_single_card_catalog() {
        let mut catalog = CardCatalog::new();
        catalog.register_auto("solo", "/s.png");

        let deck = build_deck(&catalog);
        assert_eq!(deck.len(), 2);
        assert!(deck[0].matches(&deck[1]));
    }
}
