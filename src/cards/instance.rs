//! Card instances - per-slot runtime state.
//!
//! `CardInstance` is one slot in a dealt deck. Every field is copied out
//! of the definition rather than shared, so flipping one instance's
//! `revealed` flag can never leak into another instance - in particular
//! not into its pair-mate. (An earlier draft of the game aliased the
//! catalog entries into the deck and both "copies" flipped together.)

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};

/// A card instance occupying one deck slot.
///
/// Two instances per definition exist in any dealt deck. Instances are
/// built at deal time and discarded wholesale on reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Definition this instance was copied from.
    pub card_id: CardId,

    /// Definition name; pair matching compares this.
    pub name: String,

    /// Image reference shown while revealed.
    pub image: String,

    /// Is this card currently face-up?
    pub revealed: bool,
}

impl CardInstance {
    /// Create a fresh face-down instance from a definition.
    ///
    /// Each field is copied individually; the instance shares no storage
    /// with the definition or with any other instance.
    #[must_use]
    pub fn from_definition(def: &CardDefinition) -> Self {
        Self {
            card_id: def.id,
            name: def.name.clone(),
            image: def.image.clone(),
            revealed: false,
        }
    }

    /// Check whether this instance matches another (same definition name).
    #[must_use]
    pub fn matches(&self, other: &CardInstance) -> bool {
        self.name == other.name
    }
}
