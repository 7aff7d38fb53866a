//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores the unique card definitions a game deals
//! from. It preserves registration order so deck construction is
//! deterministic for a given seed, and provides fast lookup by `CardId`.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};

/// Ordered registry of unique card definitions.
///
/// Each definition appears once here; the deck builder duplicates them
/// into matching pairs at deal time.
///
/// ## Example
///
/// ```
/// use match_pairs::cards::{CardCatalog, CardId};
///
/// let mut catalog = CardCatalog::new();
/// let id = catalog.register_auto("apple", "/img/apple.png");
///
/// assert_eq!(catalog.get(id).unwrap().name, "apple");
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<CardDefinition>,
    by_id: FxHashMap<CardId, usize>,
    next_id: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The two-card catalog the original game ships with.
    #[must_use]
    pub fn starter() -> Self {
        let mut catalog = Self::new();
        catalog.register_auto(
            "bfwse",
            "https://www.applesfromny.com/wp-content/uploads/2020/05/Jonagold_NYAS-Apples2.png",
        );
        catalog.register_auto(
            "halo",
            "https://www.lgssales.com/wp-content/uploads/2017/07/darling-oranges-1.png",
        );
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.by_id.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.by_id.insert(card.id, self.cards.len());
        self.cards.push(card);
    }

    /// Register a card with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, name: impl Into<String>, image: impl Into<String>) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;

        self.register(CardDefinition::new(id, name, image));
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.by_id.get(&id).map(|&idx| &self.cards[idx])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}
