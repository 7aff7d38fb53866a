//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type: its
//! display name and the image shown when it is revealed.
//!
//! Per-slot mutable state (`revealed`) lives in `CardInstance`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card, not a specific slot on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// Two matching board slots share one definition; the match check compares
/// definition names.
///
/// ## Example
///
/// ```
/// use match_pairs::cards::{CardDefinition, CardId};
///
/// let apple = CardDefinition::new(CardId::new(1), "apple", "/img/apple.png");
/// assert_eq!(apple.name, "apple");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name; pair matching compares this.
    pub name: String,

    /// Image reference (URL or path) shown when the card is revealed.
    pub image: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }
}
